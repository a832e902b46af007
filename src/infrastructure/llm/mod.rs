mod openai_completion_client;

pub use openai_completion_client::OpenAiCompletionClient;
