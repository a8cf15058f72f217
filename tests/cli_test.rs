mod helpers;

use anyhow::Result;
use clap::Parser;
use tofu_apply::cli::{Cli, Commands, LogLevel};
use tofu_apply::{InputKey, TofuApplyError};

#[test]
fn test_parse_render_command() -> Result<()> {
    let args = Cli::parse_from(["tofu-apply", "render", "--file", "inputs.yml"]);

    match args.command {
        Commands::Render(opts) => {
            assert_eq!(opts.inputs.file.as_deref().map(|p| p.as_str()), Some("inputs.yml"));
            assert!(opts.inputs.overrides.is_empty());
            assert_eq!(opts.program, "tofu");
            assert_eq!(opts.log_level, LogLevel::Warn);
        }
        _ => panic!("Expected Render command"),
    }

    Ok(())
}

#[test]
fn test_parse_render_with_overrides() -> Result<()> {
    let args = Cli::parse_from([
        "tofu-apply",
        "render",
        "--set",
        "var=region=us-east-1",
        "--set",
        "auto-approve=true",
        "--program",
        "terraform",
        "--log-level",
        "debug",
    ]);

    match args.command {
        Commands::Render(opts) => {
            assert!(opts.inputs.file.is_none());
            assert_eq!(opts.inputs.overrides.len(), 2);
            assert_eq!(opts.inputs.overrides[0].key, InputKey::Var);
            assert_eq!(opts.inputs.overrides[0].value, "region=us-east-1");
            assert_eq!(opts.inputs.overrides[1].key, InputKey::AutoApprove);
            assert_eq!(opts.program, "terraform");
            assert_eq!(opts.log_level, LogLevel::Debug);
        }
        _ => panic!("Expected Render command"),
    }

    Ok(())
}

#[test]
fn test_parse_rejects_unknown_override_key() {
    let result = Cli::try_parse_from(["tofu-apply", "render", "--set", "colour=true"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_override_without_equals() {
    let result = Cli::try_parse_from(["tofu-apply", "render", "--set", "destroy"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_validate_command() -> Result<()> {
    let args = Cli::parse_from(["tofu-apply", "validate", "-f", "inputs.yml"]);

    match args.command {
        Commands::Validate(opts) => {
            assert_eq!(opts.inputs.file.as_deref().map(|p| p.as_str()), Some("inputs.yml"));
            assert_eq!(opts.log_level, LogLevel::Info);
        }
        _ => panic!("Expected Validate command"),
    }

    Ok(())
}

#[test]
fn test_run_render_from_file_and_overrides() -> Result<()> {
    let (_dir, path) = helpers::write_inputs_file("chdir: ./infra\nvar: env=prod\n");
    let args = Cli::parse_from([
        "tofu-apply",
        "render",
        "--file",
        path.as_str(),
        "--set",
        "auto-approve=true",
    ]);

    let Commands::Render(opts) = args.command else {
        panic!("Expected Render command");
    };
    let command = tofu_apply::run_render(&opts)?;
    assert_eq!(command, "tofu -chdir=./infra apply --auto-approve --var=env=prod");

    Ok(())
}

#[test]
fn test_run_render_with_program_override() -> Result<()> {
    let args = Cli::parse_from(["tofu-apply", "render", "--program", "/usr/local/bin/tofu"]);
    let Commands::Render(opts) = args.command else {
        panic!("Expected Render command");
    };
    assert_eq!(tofu_apply::run_render(&opts)?, "/usr/local/bin/tofu apply");

    Ok(())
}

#[test]
fn test_run_validate_accepts_well_formed_inputs() -> Result<()> {
    let (_dir, path) = helpers::write_inputs_file("plan-file: tfplan\ndestroy: true\n");
    let args = Cli::parse_from(["tofu-apply", "validate", "--file", path.as_str()]);
    let Commands::Validate(opts) = args.command else {
        panic!("Expected Validate command");
    };
    tofu_apply::run_validate(&opts)?;

    Ok(())
}

#[test]
fn test_run_validate_rejects_malformed_boolean() {
    let args = Cli::parse_from(["tofu-apply", "validate", "--set", "json=yes"]);
    let Commands::Validate(opts) = args.command else {
        panic!("Expected Validate command");
    };

    let err = tofu_apply::run_validate(&opts).unwrap_err();
    assert!(err.to_string().contains("input validation failed"));
    let typed = err.downcast_ref::<TofuApplyError>();
    assert!(
        matches!(typed, Some(TofuApplyError::Validation(msg)) if msg.contains("'json': yes")),
        "got: {:?}",
        typed
    );
}

#[test]
fn test_run_validate_lists_every_malformed_boolean() {
    let args = Cli::parse_from([
        "tofu-apply",
        "validate",
        "--set",
        "json=yes",
        "--set",
        "no-color=1",
    ]);
    let Commands::Validate(opts) = args.command else {
        panic!("Expected Validate command");
    };

    let err = tofu_apply::run_validate(&opts).unwrap_err();
    let Some(TofuApplyError::Validation(msg)) = err.downcast_ref::<TofuApplyError>() else {
        panic!("expected Validation error, got: {:?}", err);
    };
    assert_eq!(msg.matches("; ").count(), 1, "got: {}", msg);
    assert!(msg.contains("'json': yes"), "got: {}", msg);
    assert!(msg.contains("'no-color': 1"), "got: {}", msg);
}
