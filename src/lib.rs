//! Workspace-level integration tests for fibdec live under `tests/`.
