use stepgate::{evaluate, Answers, ConditionSet};

fn main() {
    let gate = ConditionSet::from_dsl(
        "# show the state step for US orders only\n\
         country equals \"US\" AND state is_not_empty",
    )
    .expect("failed to parse conditions");

    println!("{gate}");

    let answers = Answers::new().set("country", "US").set("state", "CA");

    println!("Visible: {}", evaluate(&gate, &answers));
}
