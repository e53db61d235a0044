// numstat-core/tests/aggregator_tests.rs
use numstat_core::{aggregate, parse, Statistics};

#[test]
fn test_empty_dataset_is_empty_signal() {
    assert_eq!(aggregate(&[]), None);
}

#[test]
fn test_comma_separated_scenario() {
    let parsed = parse("1, 2, 3, 4, 5");
    let record = aggregate(&parsed.values).unwrap();
    assert_eq!(record.mean, "3.000000");
    assert_eq!(record.std_dev, "1.414214");
    assert_eq!(record.count, 5);
    assert_eq!(record.min, "1.000000");
    assert_eq!(record.max, "5.000000");
    assert_eq!(record.range, "4.000000");
}

#[test]
fn test_partial_scenario_mean() {
    let parsed = parse("10 abc 20 ; xyz 30");
    let record = aggregate(&parsed.values).unwrap();
    assert_eq!(record.mean, "20.000000");
    assert_eq!(record.count, 3);
}

#[test]
fn test_mean_is_bounded_by_min_and_max() {
    let datasets: [&[f64]; 5] = [
        &[1.0],
        &[0.1, 0.2, 0.3],
        &[-5.5, 3.25, 1e10, -1e-10],
        &[0.1; 7],
        &[1e308, 1e308],
    ];
    for data in datasets {
        let stats = Statistics::compute(data).unwrap();
        assert!(stats.min <= stats.mean, "data {:?}", data);
        assert!(stats.mean <= stats.max, "data {:?}", data);
        assert_eq!(stats.range, stats.max - stats.min);
        assert!(stats.range >= 0.0);
    }
}

#[test]
fn test_identical_values_have_zero_deviation() {
    for value in [0.1, -3.7, 1e-300, 123456.789] {
        let stats = Statistics::compute(&[value; 9]).unwrap();
        assert_eq!(stats.std_dev, 0.0, "value {}", value);
    }
}

#[test]
fn test_population_not_sample_deviation() {
    // Sample deviation of [1, 3] would be sqrt(2); population is 1.
    let record = aggregate(&[1.0, 3.0]).unwrap();
    assert_eq!(record.std_dev, "1.000000");
}

#[test]
fn test_input_is_not_mutated() {
    let data = vec![3.0, 1.0, 2.0];
    let _ = aggregate(&data);
    assert_eq!(data, vec![3.0, 1.0, 2.0]);
}
