use std::fs;

use rpncalc::evaluate_expression;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, (expression, expected)) in extract_cases(&content) {
            count += 1;
            let value = evaluate_expression(&expression).unwrap_or_else(|e| {
                                                            panic!("{path:?}:{line_number}: '{expression}' failed: {e}")
                                                        });
            let matches = if expected.is_nan() {
                value.is_nan()
            } else {
                (value - expected).abs() <= 1e-9 * expected.abs().max(1.0)
            };
            assert!(matches,
                    "{path:?}:{line_number}: '{expression}' evaluated to {value}, expected {expected}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(usize, (String, f64))> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| {
               let trimmed = line.trim();
               !trimmed.is_empty() && !trimmed.starts_with('#')
           })
           .map(|(i, line)| {
               let (expression, expected) =
                   line.split_once("=>")
                       .unwrap_or_else(|| panic!("Line {} is missing '=>': {line}", i + 1));
               let expected = expected.trim()
                                      .parse::<f64>()
                                      .unwrap_or_else(|e| panic!("Line {} has a bad expected value: {e}", i + 1));
               (i + 1, (expression.trim().to_string(), expected))
           })
           .collect()
}
