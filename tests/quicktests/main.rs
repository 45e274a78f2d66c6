//! Property tests against the public `OrderedTree` API.

mod ordered;
