/// Console adapters for stderr progress and terminal output
mod progress_reporter;
mod tree_printer;

pub use progress_reporter::StderrProgressReporter;
pub use tree_printer::TreePrinter;
