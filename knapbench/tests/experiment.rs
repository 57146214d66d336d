use knapbench::{ExperimentRecord, ExperimentRunner, ExperimentSettings, SeedPolicy};
use knapbench_challenges::{knapsack::Challenge, KnapsackError};

fn without_times(record: &ExperimentRecord) -> ExperimentRecord {
    ExperimentRecord {
        greedy_time: 0.0,
        dp_time: 0.0,
        ..record.clone()
    }
}

#[test]
fn test_run_challenge_classic_instance() {
    let challenge = Challenge::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap();
    let record = ExperimentRunner::new(42).run_challenge(&challenge).unwrap();

    assert_eq!(record.num_items, 3);
    assert_eq!(record.capacity, 50);
    assert_eq!(record.greedy_value, 160);
    assert_eq!(record.greedy_weight, 30);
    assert_eq!(record.greedy_items, 2);
    assert_eq!(record.dp_value, 220);
    assert_eq!(record.dp_weight, 50);
    assert_eq!(record.dp_items, 2);
    assert!((record.approximation_ratio - 0.727).abs() < 1e-3);
    assert!((record.gap_percent - 27.2727).abs() < 1e-3);
    assert!(record.greedy_time >= 0.0);
    assert!(record.dp_time >= 0.0);
    assert!(!record.greedy_is_optimal());
}

#[test]
fn test_run_experiment_zero_items() {
    let record = ExperimentRunner::new(42).run_experiment(0, Some(42)).unwrap();
    assert_eq!(record.capacity, 0);
    assert_eq!(record.greedy_value, 0);
    assert_eq!(record.dp_value, 0);
    assert_eq!(record.greedy_items, 0);
    assert_eq!(record.dp_items, 0);
    assert_eq!(record.approximation_ratio, 0.0);
    assert_eq!(record.gap_percent, 0.0);
}

#[test]
fn test_run_experiment_uses_seeded_instance() {
    let record = ExperimentRunner::new(0).run_experiment(100, Some(142)).unwrap();
    let challenge = Challenge::generate_seeded(100, 142);
    assert_eq!(record.capacity, challenge.max_weight as u64);
    assert_eq!(record.num_items, 100);
}

#[test]
fn test_seeded_experiments_are_reproducible() {
    let a = ExperimentRunner::new(1).run_experiment(200, Some(242)).unwrap();
    let b = ExperimentRunner::new(2).run_experiment(200, Some(242)).unwrap();
    assert_eq!(without_times(&a), without_times(&b));
}

#[test]
fn test_unseeded_experiments_continue_the_stream() {
    let mut runner_a = ExperimentRunner::new(7);
    let mut runner_b = ExperimentRunner::new(7);
    let first_a = runner_a.run_experiment(60, None).unwrap();
    let second_a = runner_a.run_experiment(60, None).unwrap();
    let first_b = runner_b.run_experiment(60, None).unwrap();
    let second_b = runner_b.run_experiment(60, None).unwrap();

    assert_eq!(without_times(&first_a), without_times(&first_b));
    assert_eq!(without_times(&second_a), without_times(&second_b));
    assert_ne!(first_a.capacity, 0);
}

#[test]
fn test_metrics_are_bounded() {
    let mut runner = ExperimentRunner::new(42);
    for seed in 0..20 {
        let record = runner.run_experiment(80, Some(seed)).unwrap();
        assert!(record.dp_value >= record.greedy_value);
        assert!((0.0..=1.0).contains(&record.approximation_ratio));
        assert!((0.0..=100.0).contains(&record.gap_percent));
        assert_eq!(record.approximation_ratio == 1.0, record.greedy_is_optimal());
        assert!(record.greedy_weight <= record.capacity);
        assert!(record.dp_weight <= record.capacity);
    }
}

#[test]
fn test_run_batch_in_request_order() {
    let settings = ExperimentSettings {
        sizes: vec![30, 10, 20],
        ..Default::default()
    };
    let mut seen = Vec::new();
    let records = ExperimentRunner::from_settings(&settings)
        .run_batch(&settings, |record| seen.push(record.num_items))
        .unwrap();

    assert_eq!(seen, vec![30, 10, 20]);
    assert_eq!(
        records.iter().map(|r| r.num_items).collect::<Vec<_>>(),
        vec![30, 10, 20]
    );
    let expected = ExperimentRunner::new(0)
        .run_experiment(10, Some(settings.seed + 10))
        .unwrap();
    assert_eq!(without_times(&records[1]), without_times(&expected));
}

#[test]
fn test_run_batch_fixed_policy() {
    let settings = ExperimentSettings {
        sizes: vec![40, 40],
        seed_policy: SeedPolicy::Fixed,
        ..Default::default()
    };
    let records = ExperimentRunner::from_settings(&settings)
        .run_batch(&settings, |_| {})
        .unwrap();
    assert_eq!(without_times(&records[0]), without_times(&records[1]));
}

#[test]
fn test_run_batch_aborts_on_resource_exhaustion() {
    let settings = ExperimentSettings {
        sizes: vec![0, 50, 100],
        max_table_cells: 10,
        ..Default::default()
    };
    let mut seen = 0;
    let err = ExperimentRunner::from_settings(&settings)
        .run_batch(&settings, |_| seen += 1)
        .unwrap_err();

    assert_eq!(seen, 1);
    assert!(matches!(
        err.downcast_ref::<KnapsackError>(),
        Some(KnapsackError::ResourceExhausted { limit: 10, .. })
    ));
}

#[test]
fn test_speedup() {
    let challenge = Challenge::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap();
    let mut record = ExperimentRunner::new(42).run_challenge(&challenge).unwrap();
    record.greedy_time = 0.5;
    record.dp_time = 2.0;
    assert_eq!(record.speedup(), 4.0);
    record.greedy_time = 0.0;
    assert_eq!(record.speedup(), 0.0);
}

#[test]
fn test_run_challenge_rejects_invalid_instance() {
    let challenge = Challenge {
        num_items: 2,
        weights: vec![1, 2],
        values: vec![10],
        max_weight: 3,
    };
    let err = ExperimentRunner::new(42).run_challenge(&challenge).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KnapsackError>(),
        Some(KnapsackError::InvalidInstance(_))
    ));
}
