//! Layout Policy
//!
//! Pure decision from `(size, traits, configuration)` to pane collapse flags.
//! Detail and master are decided first. When both would collapse the
//! configuration is in conflict: master wins, the detail collapse is dropped
//! and the tab bar predicate is not consulted.

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::geometry::{Size, Traits};
use crate::rules::CollapsePredicate;
use crate::state::VisibilityState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutDecision {
    pub tab_bar_as_side_bar: bool,
    pub master_as_side_bar: bool,
    pub detail_as_modal: bool,
    /// Master and detail predicates both asked to collapse
    pub conflict: bool,
}

impl LayoutDecision {
    pub fn visibility(&self) -> VisibilityState {
        VisibilityState::new(
            self.tab_bar_as_side_bar,
            self.master_as_side_bar,
            self.detail_as_modal,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutPolicy;

impl LayoutPolicy {
    pub fn evaluate(size: Size, traits: &Traits, config: &Configuration) -> LayoutDecision {
        let ask = |predicate: &Option<CollapsePredicate>| {
            predicate
                .as_ref()
                .map(|p| p(size, traits, config))
                .unwrap_or(false)
        };

        let detail = ask(&config.rules.detail);
        let master = ask(&config.rules.master);

        let decision = if detail && master {
            LayoutDecision {
                tab_bar_as_side_bar: false,
                master_as_side_bar: true,
                detail_as_modal: false,
                conflict: true,
            }
        } else {
            LayoutDecision {
                tab_bar_as_side_bar: ask(&config.rules.tab_bar),
                master_as_side_bar: master,
                detail_as_modal: detail,
                conflict: false,
            }
        };

        tracing::debug!(
            width = size.width,
            compact = traits.is_compact(),
            tab_bar = decision.tab_bar_as_side_bar,
            master = decision.master_as_side_bar,
            detail = decision.detail_as_modal,
            conflict = decision.conflict,
            "Evaluated layout policy"
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Idiom, SizeClass};
    use crate::rules::CollapseRules;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn constant_rules(tab_bar: bool, master: bool, detail: bool) -> CollapseRules {
        CollapseRules::never()
            .with_tab_bar(move |_, _, _| tab_bar)
            .with_master(move |_, _, _| master)
            .with_detail(move |_, _, _| detail)
    }

    #[test]
    fn test_full_layout_on_wide_pad() {
        let config = Configuration::default().with_rules(CollapseRules::standard());
        let traits = Traits::new(Idiom::Pad, SizeClass::Regular);
        let decision = LayoutPolicy::evaluate(Size::new(1024.0, 768.0), &traits, &config);
        assert_eq!(decision, LayoutDecision::default());
    }

    #[test]
    fn test_missing_predicates_never_collapse() {
        let config = Configuration::default();
        let traits = Traits::new(Idiom::Phone, SizeClass::Compact);
        let decision = LayoutPolicy::evaluate(Size::new(320.0, 568.0), &traits, &config);
        assert_eq!(decision.visibility(), VisibilityState::inline());
    }

    #[test]
    fn test_conflict_suppresses_detail_and_skips_tab_bar() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rules = constant_rules(false, true, true).with_tab_bar(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let config = Configuration::default().with_rules(rules);

        let decision = LayoutPolicy::evaluate(Size::new(700.0, 500.0), &Traits::default(), &config);
        assert!(decision.conflict);
        assert!(decision.master_as_side_bar);
        assert!(!decision.detail_as_modal);
        assert!(!decision.tab_bar_as_side_bar);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_predicates_see_configuration() {
        let rules = CollapseRules::never()
            .with_detail(|size, _, config| size.width < config.master_width * 2.0);
        let mut config = Configuration::default().with_rules(rules);

        let size = Size::new(600.0, 400.0);
        assert!(LayoutPolicy::evaluate(size, &Traits::default(), &config).detail_as_modal);
        config.master_width = 200.0;
        assert!(!LayoutPolicy::evaluate(size, &Traits::default(), &config).detail_as_modal);
    }

    proptest! {
        #[test]
        fn decision_never_collapses_master_and_detail(
            tab_bar in any::<bool>(),
            master in any::<bool>(),
            detail in any::<bool>(),
            width in 0.0f64..2000.0,
        ) {
            let config = Configuration::default().with_rules(constant_rules(tab_bar, master, detail));
            let decision = LayoutPolicy::evaluate(Size::new(width, 800.0), &Traits::default(), &config);
            prop_assert!(decision.visibility().is_valid());
            prop_assert_eq!(decision.conflict, master && detail);
        }

        #[test]
        fn evaluation_is_deterministic(width in 0.0f64..2000.0, compact in any::<bool>(), pad in any::<bool>()) {
            let config = Configuration::default().with_rules(CollapseRules::standard());
            let traits = Traits::new(
                if pad { Idiom::Pad } else { Idiom::Phone },
                if compact { SizeClass::Compact } else { SizeClass::Regular },
            );
            let size = Size::new(width, 800.0);
            prop_assert_eq!(
                LayoutPolicy::evaluate(size, &traits, &config),
                LayoutPolicy::evaluate(size, &traits, &config)
            );
        }
    }
}
