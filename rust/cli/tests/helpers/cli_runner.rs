use std::time::{Duration, Instant};

const SHOWDOWN_VARS: &[&str] = &[
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_OPPONENTS",
    "SHOWDOWN_TIE_POLICY",
    "SHOWDOWN_TABLE_SUITS",
];

#[derive(Debug, Default)]
pub struct CliRunner;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clear every `SHOWDOWN_*` variable, then apply `pairs`.
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in SHOWDOWN_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: every test using the runner is #[serial]
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            if !SHOWDOWN_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

impl CliRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _env = EnvGuard::apply(env);
        let argv: Vec<&str> = std::iter::once("showdown").chain(args.iter().copied()).collect();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let start = Instant::now();
        let exit_code = showdown_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
            duration: start.elapsed(),
        }
    }
}
