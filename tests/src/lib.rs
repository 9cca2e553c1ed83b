#![cfg(test)]
mod orchestration;
mod support;
