//! npm command vocabulary and argument building.

/// Commands npm understands directly; anything else is a package script.
pub const NPM_COMMANDS: &[&str] = &[
    "access",
    "adduser",
    "audit",
    "bin",
    "bugs",
    "c",
    "cache",
    "ci",
    "cit",
    "clean-install",
    "clean-install-test",
    "completion",
    "config",
    "create",
    "ddp",
    "dedupe",
    "deprecate",
    "dist-tag",
    "docs",
    "doctor",
    "edit",
    "explore",
    "fund",
    "get",
    "help",
    "help-search",
    "hook",
    "i",
    "init",
    "install",
    "install-ci-test",
    "install-test",
    "it",
    "link",
    "list",
    "ln",
    "login",
    "logout",
    "ls",
    "org",
    "outdated",
    "owner",
    "pack",
    "ping",
    "prefix",
    "profile",
    "prune",
    "publish",
    "rb",
    "rebuild",
    "repo",
    "restart",
    "root",
    "run",
    "run-script",
    "s",
    "se",
    "search",
    "set",
    "shrinkwrap",
    "star",
    "stars",
    "start",
    "stop",
    "t",
    "team",
    "test",
    "token",
    "tst",
    "un",
    "uninstall",
    "unpublish",
    "unstar",
    "up",
    "update",
    "v",
    "version",
    "view",
    "whoami",
];

/// Commands that require `node_modules` to match the lockfile.
pub const GUARDED_COMMANDS: &[&str] = &["start", "publish", "run"];

/// Whether `token` is an npm command.
pub fn is_npm_command(token: &str) -> bool {
    NPM_COMMANDS.contains(&token)
}

/// Whether `token` triggers the stale-dependency guard.
pub fn is_guarded(token: Option<&str>) -> bool {
    token.is_some_and(|t| GUARDED_COMMANDS.contains(&t))
}

/// Translate tool arguments into npm arguments.
///
/// npm commands pass through, other tokens become `run <script>`, and no
/// arguments means `install`.
pub fn build_npm_args(args: &[String]) -> Vec<String> {
    match args.first() {
        None => vec!["install".to_string()],
        Some(cmd) if is_npm_command(cmd) => args.to_vec(),
        Some(_) => std::iter::once("run".to_string())
            .chain(args.iter().cloned())
            .collect(),
    }
}

/// Whether the npm arguments start the project (`start` or `run start`).
pub fn is_start(npm_args: &[String]) -> bool {
    match npm_args {
        [first, ..] if first == "start" => true,
        [first, second, ..] => first == "run" && second == "start",
        _ => false,
    }
}
