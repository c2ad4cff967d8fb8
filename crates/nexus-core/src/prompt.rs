//! Narration prompt builder.
//!
//! Produces the Explorer Nexus persona prompt for a single allocation. The
//! prompt has a persona line, a PERSONALITY paragraph, a CONTEXT block with
//! the quoted contribution, award, reason, `{total}/100` session progress and
//! the mock transaction id, six RESPONSE RULES, the expected format line, and
//! a fenced `json` block holding the pretty-printed allocation.
//!
//! The user turn is the raw message, so the model sees it twice: once quoted
//! in context, once as the actual request.

use nexus_types::allocation::SESSION_TOKEN_CAP;
use nexus_types::config::LlmConfig;
use nexus_types::llm::{CompletionRequest, Message, MessageRole};
use nexus_types::narration::NarrationRequest;

pub struct NarrationPromptBuilder;

impl NarrationPromptBuilder {
    /// Build the system prompt for one narration request.
    pub fn system_prompt(request: &NarrationRequest) -> String {
        let allocation = &request.allocation;
        let allocation_json = serde_json::to_string_pretty(allocation).unwrap_or_default();

        format!(
            "You are Explorer Nexus, an AI agent for the Society of Explorers platform. \
You facilitate merit-based token allocation for blockchain expeditions on Solana.

PERSONALITY: Masculine, direct, action-oriented. Use explorer/military terminology. Be concise and powerful.

CONTEXT: User just contributed: \"{message}\"
- Tokens awarded: {tokens}
- Reason: {reason}
- Session progress: {total}/{cap} tokens
- Transaction: {reference}

RESPONSE RULES:
1. Acknowledge contribution with power words
2. Confirm token allocation briefly
3. Ask ONE strategic follow-up question to drive action
4. Keep response under 50 words
5. Use emojis sparingly (⚡🎯🔥)
6. End with JSON block showing allocation

Format:
[Acknowledgment] [Token confirmation] [Strategic question]

```json
{allocation_json}
```",
            message = request.message,
            tokens = allocation.tokens_awarded,
            reason = allocation.reason,
            total = request.session_tokens,
            cap = SESSION_TOKEN_CAP,
            reference = allocation.reference_id,
        )
    }

    /// Build the completion request: persona system prompt plus the raw
    /// message as the only user turn.
    pub fn completion_request(request: &NarrationRequest, llm: &LlmConfig) -> CompletionRequest {
        CompletionRequest {
            model: llm.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: request.message.clone(),
            }],
            system: Some(Self::system_prompt(request)),
            max_tokens: llm.max_tokens,
            temperature: Some(llm.temperature),
        }
    }
}
