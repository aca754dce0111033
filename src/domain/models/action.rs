use super::ChatPrompt;

pub enum Action {
    SubmitQuery(ChatPrompt),
}
