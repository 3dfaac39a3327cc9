use crate::TestCommand;

pub trait RunReporter {
    /// Called for every planned command before it runs, dry-run included.
    fn command(&self, command: &TestCommand);
}
