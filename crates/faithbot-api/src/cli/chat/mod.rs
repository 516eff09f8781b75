//! Interactive terminal front end for the conversation widget.
//!
//! The widget state machine lives in `faithbot_core::widget`; this module
//! feeds it keyboard input, sends through the HTTP transport, and prints
//! each new bubble. Entry point: `loop_runner::run_chat_loop`.

pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
