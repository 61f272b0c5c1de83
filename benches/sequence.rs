use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepgate::{field, next_step, progress_percentage, visible_steps, Answers, ConditionSet, Step};

/// Build a form of `n` steps where every other step is gated on a toggle
/// field, half of which are answered true.
fn build_form(n: usize) -> (Vec<Step>, Answers) {
    let mut steps = Vec::with_capacity(n);
    let mut answers = Answers::new();
    for i in 0..n {
        let order = (i + 1) as u32;
        let step = if i % 2 == 0 {
            Step::new(order, format!("step {order}"))
        } else {
            let toggle = format!("toggle{i}");
            answers = answers.set(&toggle, i % 4 == 1);
            Step::new(order, format!("step {order}"))
                .gated_by(ConditionSet::new().when(field(&toggle).eq(true)))
        };
        steps.push(step);
    }
    (steps, answers)
}

fn bench_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_steps");

    for &n in &[4, 16, 64] {
        let (steps, answers) = build_form(n);
        group.bench_function(&format!("{n}_steps"), |b| {
            b.iter(|| visible_steps(black_box(&steps), black_box(&answers)));
        });
    }

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_walk");

    for &n in &[4, 16, 64] {
        let (steps, answers) = build_form(n);
        group.bench_function(&format!("{n}_steps_full_walk"), |b| {
            b.iter(|| {
                let mut order = 1;
                let mut total = 0.0_f64;
                loop {
                    total += progress_percentage(black_box(&steps), &answers, order);
                    match next_step(&steps, &answers, order) {
                        Some(step) => order = step.order,
                        None => break,
                    }
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible, bench_walk);
criterion_main!(benches);
