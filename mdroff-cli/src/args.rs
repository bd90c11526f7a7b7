//! Pre-filtering of the raw argument list.
//!
//! Unknown flags must not abort a run: they are reported as warnings and the
//! remaining arguments are processed. clap rejects unknown flags outright, so
//! they are split off before the arguments reach it.

/// Short flags md2roff understands. Bundles such as `-nd` are accepted when
/// every letter is one of these.
const SHORT_FLAGS: &[char] = &['n', 'd', 'm', 'o', 'h', 'v'];

const LONG_FLAGS: &[&str] = &[
    "--man",
    "--mdoc",
    "--mm",
    "--mom",
    "--help",
    "--version",
    "--list-dialects",
];

/// Long flags that take a value in the next argument.
const VALUE_FLAGS: &[&str] = &["--config"];

/// Split `args` (program name first) into the arguments to hand to clap and
/// the unknown flags.
///
/// A bare `-` is an input (standard input), and everything after `--` is an
/// input even when it starts with a dash.
pub fn split_unknown_flags(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut known = Vec::with_capacity(args.len());
    let mut unknown = Vec::new();
    let mut iter = args.iter();

    if let Some(program) = iter.next() {
        known.push(program.clone());
    }

    while let Some(arg) = iter.next() {
        if arg == "--" {
            known.push(arg.clone());
            known.extend(iter.by_ref().cloned());
            break;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            known.push(arg.clone());
            if let Some(value) = iter.next() {
                known.push(value.clone());
            }
            continue;
        }
        if is_known(arg) {
            known.push(arg.clone());
        } else {
            unknown.push(arg.clone());
        }
    }

    (known, unknown)
}

fn is_known(arg: &str) -> bool {
    if arg == "-" || !arg.starts_with('-') {
        return true;
    }
    if let Some(long) = arg.strip_prefix("--") {
        return match long.split_once('=') {
            Some((name, _)) => VALUE_FLAGS.contains(&format!("--{name}").as_str()),
            None => LONG_FLAGS.contains(&arg),
        };
    }
    arg[1..].chars().all(|c| SHORT_FLAGS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_empty() {
        let input = args(&["md2roff"]);
        let (known, unknown) = split_unknown_flags(&input);
        assert_eq!(known, input);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_split_keeps_known_flags_and_inputs() {
        let input = args(&["md2roff", "-n", "--mom", "a.md", "-", "-nd"]);
        let (known, unknown) = split_unknown_flags(&input);
        assert_eq!(known, input);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_split_removes_unknown_flags() {
        let input = args(&["md2roff", "-x", "a.md", "--frobnicate", "-nq"]);
        let (known, unknown) = split_unknown_flags(&input);
        assert_eq!(known, args(&["md2roff", "a.md"]));
        assert_eq!(unknown, args(&["-x", "--frobnicate", "-nq"]));
    }

    #[test]
    fn test_split_config_value_is_not_a_flag() {
        let input = args(&["md2roff", "--config", "-odd.toml", "a.md"]);
        let (known, unknown) = split_unknown_flags(&input);
        assert_eq!(known, input);
        assert!(unknown.is_empty());

        let input = args(&["md2roff", "--config=site.toml", "--man=yes"]);
        let (known, unknown) = split_unknown_flags(&input);
        assert_eq!(known, args(&["md2roff", "--config=site.toml"]));
        assert_eq!(unknown, args(&["--man=yes"]));
    }

    #[test]
    fn test_split_double_dash_ends_flags() {
        let input = args(&["md2roff", "--", "-x.md"]);
        let (known, unknown) = split_unknown_flags(&input);
        assert_eq!(known, input);
        assert!(unknown.is_empty());
    }
}
