// tests/unit_performance.rs
use genvet_core::analysis::performance;
use genvet_core::analysis::Vetter;
use genvet_core::types::ComplexityClass;

fn metrics(code: &str) -> genvet_core::types::PerformanceMetrics {
    Vetter::new()
        .analyze(code)
        .expect("analysis should succeed")
        .performance
}

#[test]
fn depth_classification_table() {
    assert_eq!(performance::classify_time(0), ComplexityClass::Constant);
    assert_eq!(performance::classify_time(1), ComplexityClass::Linear);
    assert_eq!(performance::classify_time(2), ComplexityClass::Quadratic);
    // The ceiling is deliberate: deeper nesting is still O(n²).
    assert_eq!(performance::classify_time(3), ComplexityClass::Quadratic);
    assert_eq!(performance::classify_time(7), ComplexityClass::Quadratic);
}

#[test]
fn single_loop_is_linear() {
    let m = metrics("for i in range(10):\n    x = i\n");
    assert_eq!(m.time_complexity, ComplexityClass::Linear);
}

#[test]
fn two_nested_loops_are_quadratic() {
    let code = "for i in range(10):\n    for j in range(10):\n        x = i * j\n";
    assert_eq!(metrics(code).time_complexity, ComplexityClass::Quadratic);
}

#[test]
fn three_nested_loops_are_capped_at_quadratic() {
    let code = "for i in range(3):\n    for j in range(3):\n        for k in range(3):\n            x = i + j + k\n";
    assert_eq!(metrics(code).time_complexity, ComplexityClass::Quadratic);
}

#[test]
fn loop_inside_function_body_still_counts() {
    let code = "def f(items):\n    for a in items:\n        for b in items:\n            print(a, b)\n";
    assert_eq!(metrics(code).time_complexity, ComplexityClass::Quadratic);
}

#[test]
fn sibling_loops_do_not_nest() {
    let code = "for i in range(3):\n    x = i\nfor j in range(3):\n    y = j\n";
    assert_eq!(metrics(code).time_complexity, ComplexityClass::Linear);
}

#[test]
fn no_allocation_means_constant_space() {
    let m = metrics("for i in range(10):\n    x = i + 1\n");
    assert_eq!(m.space_complexity, ComplexityClass::Constant);
}

#[test]
fn allocation_inside_loop_means_linear_space() {
    let m = metrics("for i in range(10):\n    xs = [i]\n");
    assert_eq!(m.space_complexity, ComplexityClass::Linear);
}

#[test]
fn allocation_in_nested_loop_means_quadratic_space() {
    let code = "for i in range(3):\n    for j in range(3):\n        pair = (i, j)\n";
    assert_eq!(metrics(code).space_complexity, ComplexityClass::Quadratic);
}

#[test]
fn nested_loops_trigger_depth_suggestion() {
    let code = "for i in range(3):\n    for j in range(3):\n        x = i * j\n";
    let m = metrics(code);
    assert!(m
        .optimization_suggestions
        .iter()
        .any(|s| s.contains("nested loop depth")));
}

#[test]
fn while_true_triggers_exit_suggestion() {
    let m = metrics("while True:\n    pass\n");
    assert!(m
        .optimization_suggestions
        .iter()
        .any(|s| s.contains("while True")));
}

#[test]
fn estimator_leaves_instrumentation_fields_zero() {
    let m = metrics("for i in range(3):\n    x = i\n");
    assert_eq!(m.memory_usage, 0.0);
    assert_eq!(m.execution_time, 0.0);
}
