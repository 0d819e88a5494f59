//! lotledger - Replay add/withdraw query streams against a FIFO ledger.

fn main() -> std::process::ExitCode {
    lotledger::cmd::replay::main()
}
