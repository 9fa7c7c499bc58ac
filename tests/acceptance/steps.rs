use crate::PriorityWorld;
use cucumber::{then, when};

struct NoToken;

impl linear_priority::token::TokenSource for NoToken {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}

fn run_binary(world: &mut PriorityWorld, args: &str) {
    let bin_path = env!("CARGO_BIN_EXE_linear-priority");
    let output = std::process::Command::new(bin_path)
        .args(args.split_whitespace())
        .env_remove("LINEAR_API_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute {}: {}", bin_path, e));

    world.captured_output = [output.stdout, output.stderr].concat();
    world.command_status = Some(output.status);
}

#[when(regex = r#"^I run `linear-priority ?([^`]*)` without a token$"#)]
async fn when_run_without_token(world: &mut PriorityWorld, args: String) {
    run_binary(world, &args);
}

#[when(regex = r#"^the `(fixit|prioritize)` pipeline runs in-process without a token$"#)]
async fn when_pipeline_runs_in_process(world: &mut PriorityWorld, command: String) {
    let mut buffer: Vec<u8> = Vec::new();
    let writer_option: Option<&mut dyn std::io::Write> = Some(&mut buffer);

    let args = vec!["linear-priority".to_string(), command];
    let result = linear_priority::run::run_with(
        args,
        &NoToken,
        std::path::Path::new("."),
        writer_option,
    )
    .await;

    world.captured_output = buffer;
    world.run_result = Some(result);
}

#[then(regex = r#"^the output should be "(.*)"$"#)]
async fn then_output_should_be(world: &mut PriorityWorld, expected_output: String) {
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert_eq!(
        output.trim_end(),
        expected_output,
        "Expected output '{}', but got:\n---\n{}\n---",
        expected_output,
        output.trim_end()
    );
}

#[then(regex = r#"^the output should contain "(.*)"$"#)]
async fn then_output_should_contain(world: &mut PriorityWorld, expected: String) {
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert!(
        output.contains(&expected),
        "Expected output to contain '{}', but got:\n---\n{}\n---",
        expected,
        output
    );
}

#[then("the command should succeed")]
async fn then_command_should_succeed(world: &mut PriorityWorld) {
    if let Some(result) = &world.run_result {
        assert!(result.is_ok(), "Run failed: {:?}", result);
    }
    if let Some(status) = world.command_status {
        assert!(status.success(), "Command failed with status: {:?}", status);
    }
}
