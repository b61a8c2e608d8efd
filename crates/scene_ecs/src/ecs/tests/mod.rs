//! Cross-module scenarios exercising the orchestration core end to end
