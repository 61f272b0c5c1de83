use stepgate::{evaluate, field, Answers, ConditionSet};

fn main() {
    // Define a visibility gate
    let gate = ConditionSet::new()
        .when(field("country").eq("US"))
        .and(field("state").is_not_empty());

    println!("{gate}");

    // Evaluate against the answers collected so far
    let answers = Answers::new().set("country", "US").set("state", "CA");

    if evaluate(&gate, &answers) {
        println!("Step is visible.");
    } else {
        println!("Step is hidden.");
    }
}
