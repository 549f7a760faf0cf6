mod common;
mod overrides;
