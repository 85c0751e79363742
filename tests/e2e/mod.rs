// End-to-end tests for the simple-api demo service
//
// Each test receives its own server instance bound to an ephemeral port, with
// a fresh in-memory user directory, through test-context lifecycle hooks.
// Requests go over real HTTP so the envelope is checked exactly as clients
// receive it: status line from `status_code`, body in wire format.

mod helpers;
mod test_envelope;
