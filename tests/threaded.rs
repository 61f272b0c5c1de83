use std::sync::Arc;
use std::thread;

use stepgate::{field, next_step, visible_steps, Answers, ConditionSet, Step};

#[test]
fn evaluate_across_threads() {
    let steps: Arc<Vec<Step>> = Arc::new(vec![
        Step::new(1, "Cart").required(true),
        Step::new(2, "US shipping").gated_by(ConditionSet::new().when(field("country").eq("US"))),
        Step::new(3, "Gift message").gated_by(ConditionSet::new().when(field("gift").eq(true))),
        Step::new(4, "Payment").required(true),
    ]);

    let mut handles = vec![];

    // Each thread carries its own answer snapshot against the shared form.
    let shared = Arc::clone(&steps);
    handles.push(thread::spawn(move || {
        let answers = Answers::new().set("country", "US").set("gift", true);
        let orders: Vec<u32> = visible_steps(&shared, &answers)
            .iter()
            .map(|s| s.order)
            .collect();
        (orders, next_step(&shared, &answers, 1).map(|s| s.order))
    }));

    let shared = Arc::clone(&steps);
    handles.push(thread::spawn(move || {
        let answers = Answers::new().set("country", "FR").set("gift", false);
        let orders: Vec<u32> = visible_steps(&shared, &answers)
            .iter()
            .map(|s| s.order)
            .collect();
        (orders, next_step(&shared, &answers, 1).map(|s| s.order))
    }));

    let shared = Arc::clone(&steps);
    handles.push(thread::spawn(move || {
        let answers = Answers::new().set("country", "US");
        let orders: Vec<u32> = visible_steps(&shared, &answers)
            .iter()
            .map(|s| s.order)
            .collect();
        (orders, next_step(&shared, &answers, 1).map(|s| s.order))
    }));

    let results: Vec<(Vec<u32>, Option<u32>)> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], (vec![1, 2, 3, 4], Some(2)));
    assert_eq!(results[1], (vec![1, 4], Some(4)));
    assert_eq!(results[2], (vec![1, 2, 4], Some(2)));
}
