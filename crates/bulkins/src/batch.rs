mod assemble;
pub use assemble::Assembler;

mod chunk;
pub use chunk::{exec_batch, exec_chunked};

mod now;
use now::BatchNow;

mod plan;
pub use plan::ColumnPlan;

mod project;
pub use project::project;
