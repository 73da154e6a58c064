// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instruction keywords, in their canonical lower-case form.

pub const ADD: &str = "add";
pub const ARG: &str = "arg";
pub const CMD: &str = "cmd";
pub const COPY: &str = "copy";
pub const ENTRYPOINT: &str = "entrypoint";
pub const ENV: &str = "env";
pub const EXPOSE: &str = "expose";
pub const FROM: &str = "from";
pub const HEALTHCHECK: &str = "healthcheck";
pub const LABEL: &str = "label";
pub const MAINTAINER: &str = "maintainer";
pub const ONBUILD: &str = "onbuild";
pub const RUN: &str = "run";
pub const SHELL: &str = "shell";
pub const STOPSIGNAL: &str = "stopsignal";
pub const USER: &str = "user";
pub const VOLUME: &str = "volume";
pub const WORKDIR: &str = "workdir";

/// Every known instruction keyword.
pub const COMMANDS: &[&str] = &[
    ADD,
    ARG,
    CMD,
    COPY,
    ENTRYPOINT,
    ENV,
    EXPOSE,
    FROM,
    HEALTHCHECK,
    LABEL,
    MAINTAINER,
    ONBUILD,
    RUN,
    SHELL,
    STOPSIGNAL,
    USER,
    VOLUME,
    WORKDIR,
];
