// End-to-end tests for the podcast feeds service.
//
// Each test starts the real router on an ephemeral port, wired against a mock
// upstream (an axum server serving RSS, search JSON and audio) so no test
// leaves the machine. Hit counters on the mock tell whether a request reached
// upstream or was answered from the response cache.
//
// Every test gets its own server, upstream and in-memory cache, so tests run
// in parallel without sharing state.

mod test_cache;
mod test_csp;
mod test_index;
