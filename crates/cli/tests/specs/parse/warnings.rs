//! Empty continuation line warning specs

use crate::prelude::*;

#[test]
fn empty_continuation_warns_on_stderr() {
    cli()
        .args(&["parse"])
        .stdin("FROM a\nRUN make \\\n\n    install\n")
        .passes()
        .stdout_eq("(from \"a\")\n(run \"make     install\")\n")
        .stderr_eq(concat!(
            "[WARNING]: Empty continuation line found in:\n",
            "    RUN make     install\n",
            "[WARNING]: Empty continuation lines will become errors in a future release.\n",
        ));
}

#[test]
fn comments_in_continuation_do_not_warn() {
    cli()
        .args(&["parse"])
        .stdin("RUN make \\\n# comment\n    install\n")
        .passes()
        .stderr_eq("");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .args(&["parse"])
        .env("DFP_LOG", "debug")
        .stdin("# escape=`\nFROM a\n")
        .passes()
        .stdout_eq("(from \"a\")\n")
        .stderr_has("escape directive applied");
}
