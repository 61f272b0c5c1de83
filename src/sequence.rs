//! Navigation over a form's static step list.
//!
//! All functions here are pure views over `(steps, answers)`: they filter the
//! step list through the evaluator and derive navigation metadata from the
//! visible subsequence. They are total — malformed configurations (duplicate
//! `order`, visibility cycles) are the form builder's problem and degrade to
//! well-defined answers here, never to panics.

use crate::{Answers, Step};

/// The steps currently visible under `answers`, preserving input order.
///
/// The result is always a subsequence of `steps`. A form with zero visible
/// steps is valid; the caller renders the "nothing to fill" state.
#[must_use]
pub fn visible_steps<'a>(steps: &'a [Step], answers: &Answers) -> Vec<&'a Step> {
    steps.iter().filter(|step| step.visible(answers)).collect()
}

/// The first visible step with `order` greater than `current_order`, or
/// `None` when the current step is already the last visible one.
///
/// Steps sharing an `order` are resolved first-in-input-wins; `order`
/// uniqueness is enforced upstream, not here.
#[must_use]
pub fn next_step<'a>(steps: &'a [Step], answers: &Answers, current_order: u32) -> Option<&'a Step> {
    steps
        .iter()
        .filter(|step| step.visible(answers))
        .find(|step| step.order > current_order)
}

/// The last visible step with `order` less than `current_order`, or `None`
/// when the current step is the first visible one.
#[must_use]
pub fn previous_step<'a>(
    steps: &'a [Step],
    answers: &Answers,
    current_order: u32,
) -> Option<&'a Step> {
    steps
        .iter()
        .filter(|step| step.visible(answers))
        .filter(|step| step.order < current_order)
        .next_back()
}

/// Completion percentage in `[0, 100]`, rounded to two decimal places:
/// the 1-based rank of the current step among the visible steps, over their
/// count.
///
/// Returns `0.0` when no visible step carries `current_order` — e.g. the
/// current step was hidden by an answer change. That is a caller-visible
/// degenerate case, not an error.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percentage(steps: &[Step], answers: &Answers, current_order: u32) -> f64 {
    let visible = visible_steps(steps, answers);
    let Some(position) = visible.iter().position(|step| step.order == current_order) else {
        return 0.0;
    };
    let raw = 100.0 * (position + 1) as f64 / visible.len() as f64;
    (raw * 100.0).round() / 100.0
}

/// Whether `current_order` is the first visible step.
#[must_use]
pub fn is_first_step(steps: &[Step], answers: &Answers, current_order: u32) -> bool {
    visible_steps(steps, answers)
        .first()
        .is_some_and(|step| step.order == current_order)
}

/// Whether `current_order` is the last visible step.
#[must_use]
pub fn is_last_step(steps: &[Step], answers: &Answers, current_order: u32) -> bool {
    visible_steps(steps, answers)
        .last()
        .is_some_and(|step| step.order == current_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field, ConditionSet};

    fn shop_steps() -> Vec<Step> {
        vec![
            Step::new(1, "Cart").required(true),
            Step::new(2, "US shipping")
                .gated_by(ConditionSet::new().when(field("country").eq("US"))),
            Step::new(3, "Payment").required(true),
            Step::new(4, "Gift message")
                .gated_by(ConditionSet::new().when(field("gift").eq(true))),
        ]
    }

    #[test]
    fn visible_steps_preserves_order() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "US").set("gift", true);
        let visible = visible_steps(&steps, &answers);
        let orders: Vec<u32> = visible.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn hidden_step_is_skipped() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        let orders: Vec<u32> = visible_steps(&steps, &answers)
            .iter()
            .map(|s| s.order)
            .collect();
        assert_eq!(orders, vec![1, 3]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(visible_steps(&[], &Answers::new()).is_empty());
    }

    #[test]
    fn all_steps_hidden_is_valid() {
        let steps = vec![
            Step::new(1, "a").gated_by(ConditionSet::new().when(field("x").eq(1_i64))),
            Step::new(2, "b").gated_by(ConditionSet::new().when(field("x").eq(2_i64))),
        ];
        let answers = Answers::new().set("x", 3_i64);
        assert!(visible_steps(&steps, &answers).is_empty());
        assert_eq!(next_step(&steps, &answers, 0), None);
        assert_eq!(progress_percentage(&steps, &answers, 1), 0.0);
    }

    #[test]
    fn next_step_jumps_over_hidden_step() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        assert_eq!(next_step(&steps, &answers, 1).map(|s| s.order), Some(3));
    }

    #[test]
    fn next_step_at_end_returns_none() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        assert_eq!(next_step(&steps, &answers, 3), None);
    }

    #[test]
    fn previous_step_jumps_over_hidden_step() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        assert_eq!(previous_step(&steps, &answers, 3).map(|s| s.order), Some(1));
    }

    #[test]
    fn previous_step_at_start_returns_none() {
        let steps = shop_steps();
        assert_eq!(previous_step(&steps, &Answers::new(), 1), None);
    }

    #[test]
    fn next_and_previous_are_inverse_along_visible_order() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "US").set("gift", true);

        let mut order = 1;
        while let Some(next) = next_step(&steps, &answers, order) {
            let back = previous_step(&steps, &answers, next.order).unwrap();
            assert_eq!(back.order, order);
            order = next.order;
        }
        assert_eq!(order, 4);
    }

    #[test]
    fn duplicate_order_first_in_input_wins() {
        let steps = vec![
            Step::new(1, "start"),
            Step::new(2, "first twin"),
            Step::new(2, "second twin"),
        ];
        let next = next_step(&steps, &Answers::new(), 1).unwrap();
        assert_eq!(next.title, "first twin");
    }

    #[test]
    fn progress_on_second_of_four_visible() {
        let steps = vec![
            Step::new(1, "a"),
            Step::new(2, "b"),
            Step::new(3, "c"),
            Step::new(4, "d"),
        ];
        let pct = progress_percentage(&steps, &Answers::new(), 2);
        assert!((pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_rounds_to_two_decimals() {
        let steps = vec![Step::new(1, "a"), Step::new(2, "b"), Step::new(3, "c")];
        let pct = progress_percentage(&steps, &Answers::new(), 1);
        assert!((pct - 33.33).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_counts_only_visible_steps() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        // Visible: [1, 3]; step 3 is rank 2 of 2.
        let pct = progress_percentage(&steps, &answers, 3);
        assert!((pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_of_hidden_current_step_is_zero() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        // Step 2 became hidden after the country answer changed.
        assert_eq!(progress_percentage(&steps, &answers, 2), 0.0);
    }

    #[test]
    fn first_and_last_checks() {
        let steps = shop_steps();
        let answers = Answers::new().set("country", "FR");
        assert!(is_first_step(&steps, &answers, 1));
        assert!(!is_first_step(&steps, &answers, 3));
        assert!(is_last_step(&steps, &answers, 3));
        assert!(!is_last_step(&steps, &answers, 1));
        // Hidden order is neither first nor last.
        assert!(!is_first_step(&steps, &answers, 2));
        assert!(!is_last_step(&steps, &answers, 2));
    }
}
