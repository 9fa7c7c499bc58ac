use cucumber::World;
use std::process::ExitStatus;

#[derive(Debug, Default, World)]
pub struct PriorityWorld {
    pub captured_output: Vec<u8>,
    pub command_status: Option<ExitStatus>,
    pub run_result: Option<Result<(), anyhow::Error>>,
}

#[tokio::main]
async fn main() {
    PriorityWorld::run("features").await;
}

mod steps;
