use common::export::StatusColumn;
use yew::Properties;

#[derive(Properties, PartialEq, Clone)]
pub struct SubmissionTableProps {
    /// `YesNo` shows a Contacted column instead of the literal status.
    #[prop_or_default]
    pub status_column: StatusColumn,
}
