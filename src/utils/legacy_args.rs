//! Translation of the historical dash-style command flags
//!
//! Earlier releases selected the action with flags such as `-pa` or
//! `--print-ascii`. Those are rewritten to the matching subcommand before
//! clap sees the arguments, so old shell aliases keep working.

/// (short flag, long flag, subcommand)
const LEGACY_FLAGS: &[(&str, &str, &str)] = &[
    ("-pa", "--print-ascii", "print-ascii"),
    ("-gv", "--gitea-version", "gitea-version"),
    ("-pc", "--print-config", "print-config"),
    ("-gu", "--get-user", "get-user"),
    ("-lr", "--list-repos", "list-repos"),
    ("-lor", "--list-org-repos", "list-org-repos"),
    ("-rc", "--repo-count", "repo-count"),
    ("-cr", "--create-repo", "create-repo"),
    ("-pul", "--print-user-langs", "print-user-langs"),
    ("-tul", "--top-user-langs", "top-user-langs"),
    ("-loc", "--lines-of-code", "lines-of-code"),
];

/// Subcommand a legacy flag stands for, if it is one
pub fn legacy_subcommand(arg: &str) -> Option<&'static str> {
    LEGACY_FLAGS
        .iter()
        .find(|(short, long, _)| arg == *short || arg == *long)
        .map(|(_, _, subcommand)| *subcommand)
}

/// Rewrite legacy flags in a full argument list, program name included
///
/// Arguments after a `--` separator are left untouched.
pub fn translate_legacy_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut translated = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg = arg.into();
        if index == 0 || passthrough {
            translated.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            translated.push(arg);
            continue;
        }

        match legacy_subcommand(&arg) {
            Some(subcommand) => {
                tracing::debug!("Translating legacy flag {} to '{}'", arg, subcommand);
                translated.push(subcommand.to_string());
            }
            None => translated.push(arg),
        }
    }

    translated
}
