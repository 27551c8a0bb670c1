//! Prompt assembly for the completions endpoint

/// Assemble the prompt sent to the provider.
///
/// Embedded newlines in the context are flattened to single spaces;
/// the fixed template ends in "A:" to bias the model toward a
/// terminal answer. Deterministic; no length validation happens
/// here.
pub fn assemble_prompt(text: &str, question: &str)
  -> String
{   format!(
      "'Please answer the question according to the above context.\n\
       \n\
       ===\n\
       Context: {}\n\
       ===\n\
       Q: {}\n\
       A:",
      text.replace('\n', " "),
      question
    )
}
