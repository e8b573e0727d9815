//! Engine error taxonomy.
//!
//! Everything here is a configuration error: the caller supplied input the
//! engine cannot act on and no maze state has been mutated by the failing
//! call. Topology definition bugs (adjacency desynchronisation, unreachable
//! cells in a freshly generated maze) are programming errors and are guarded
//! by `debug_assert!` at the offending site instead.

use error_chain::error_chain;

error_chain! {
    errors {
        /// A generation algorithm was asked to run on a grid family it does not support.
        UnsupportedTopology(algorithm: &'static str, topology: String) {
            description("generation algorithm does not support this topology")
            display("{} cannot generate on the {} topology", algorithm, topology)
        }
        /// A probability style tuning value was outside its half open (0, 1] range.
        InvalidBias(name: &'static str, value: f64) {
            description("bias value out of the (0, 1] range")
            display("{} bias {} is outside the valid (0, 1] range", name, value)
        }
        /// Growing tree selection weights must not all be zero.
        InvalidWeights {
            description("all growing tree selection weights are zero")
            display("at least one of the random/newest/oldest weights must be non-zero")
        }
        /// An entrance/exit request did not name a usable boundary cell.
        InvalidOpening(detail: String) {
            description("invalid maze opening position")
            display("invalid maze opening: {}", detail)
        }
        /// Solving needs two carved openings when no explicit endpoints are given.
        TooFewOpenings(carved: usize) {
            description("not enough openings carved to solve the maze")
            display("solving needs two openings but only {} carved", carved)
        }
        /// A coordinate fell outside the grid's dimensions.
        InvalidCoordinate(x: u32, y: u32) {
            description("coordinate outside the grid")
            display("coordinate ({}, {}) is outside the grid", x, y)
        }
        /// Two cells were asked to connect but the topology does not join them.
        NotAdjacent(ax: u32, ay: u32, bx: u32, by: u32) {
            description("cells are not adjacent in this topology")
            display("cells ({}, {}) and ({}, {}) are not adjacent", ax, ay, bx, by)
        }
        /// A cell cannot link to itself.
        SelfLink(x: u32, y: u32) {
            description("cell cannot link to itself")
            display("cell ({}, {}) cannot link to itself", x, y)
        }
        /// No route exists between the requested endpoints.
        NoPath {
            description("no path between the requested cells")
            display("no path between the requested cells")
        }
        /// The transform input must be a perfect maze.
        NotPerfect {
            description("maze is not a perfect maze")
            display("operation requires a perfect (loop free, fully connected) maze")
        }
    }
}
