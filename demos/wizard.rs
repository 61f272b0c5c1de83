use stepgate::{
    field, next_step, previous_step, progress_percentage, visible_steps, Answers, ConditionSet,
    Step,
};

fn main() {
    let steps = vec![
        Step::new(1, "Cart").required(true),
        Step::new(2, "Shipping address").required(true),
        Step::new(3, "State").gated_by(
            ConditionSet::new()
                .when(field("country").eq("US"))
                .and(field("state").is_not_empty()),
        ),
        Step::new(4, "Gift message")
            .gated_by(ConditionSet::new().when(field("gift").eq(true))),
        Step::new(5, "Payment").required(true),
    ];

    let answers = Answers::new()
        .set("country", "US")
        .set("state", "CA")
        .set("gift", false);

    println!("Visible steps:");
    for step in visible_steps(&steps, &answers) {
        println!("  {step}: {:.2}%", progress_percentage(&steps, &answers, step.order));
    }

    let current = 3;
    println!();
    println!(
        "From step {current}: next = {:?}, previous = {:?}",
        next_step(&steps, &answers, current).map(|s| s.order),
        previous_step(&steps, &answers, current).map(|s| s.order),
    );
}
