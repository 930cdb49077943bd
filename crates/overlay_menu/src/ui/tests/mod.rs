//! Panel-level integration tests on the headless backend
