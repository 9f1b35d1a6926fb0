use super::*;
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> Result<String, CliError> {
    let args: Vec<String> = args.iter().map(|s| (*s).to_string()).collect();
    let mut out = Vec::new();
    run_distance(&args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_exact_distance() {
    assert_eq!(run(&["kitten", "sitting"]).unwrap(), "3\n");
    assert_eq!(run(&["kitten", "sitting", "0"]).unwrap(), "3\n");
}

#[test]
fn test_bounded_distance() {
    assert_eq!(run(&["kitten", "sitting", "1"]).unwrap(), "2\n");
}

#[test]
fn test_bad_arguments() {
    assert_eq!(
        run(&["kitten"]).unwrap_err().to_string(),
        "missing string to compare"
    );
    assert_eq!(
        run(&["a", "b", "-1"]).unwrap_err().to_string(),
        "invalid distance bound `-1`"
    );
    assert_eq!(
        run(&["a", "b", "1", "c"]).unwrap_err().to_string(),
        "unexpected argument `c`"
    );
}
