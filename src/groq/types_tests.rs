//! Unit tests for Groq API types.
//!
//! Tests request/response types, serialization, deserialization,
//! and builder patterns for the chat-completions endpoint.

use super::*;
use serde_json::json;

// Message tests
#[test]
fn test_message_system() {
    let msg = Message::system("You are a writing coach");
    assert!(matches!(msg.role, MessageRole::System));
    assert_eq!(msg.content, "You are a writing coach");
}

#[test]
fn test_message_user() {
    let msg = Message::user("Document:\n---\nHello\n---");
    assert!(matches!(msg.role, MessageRole::User));
    assert_eq!(msg.content, "Document:\n---\nHello\n---");
}

#[test]
fn test_message_assistant() {
    let msg = Message::assistant("CLARITY_SCORE: 7");
    assert!(matches!(msg.role, MessageRole::Assistant));
    assert_eq!(msg.content, "CLARITY_SCORE: 7");
}

#[test]
fn test_message_role_serializes_lowercase() {
    let msg = Message::system("prompt");
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["role"], "system");
}

// ChatRequest tests
#[test]
fn test_chat_request_new() {
    let req = ChatRequest::new("llama-3.3-70b-versatile", vec![Message::user("test")]);
    assert_eq!(req.model, "llama-3.3-70b-versatile");
    assert_eq!(req.messages.len(), 1);
    assert!(!req.stream);
    assert!(req.temperature.is_none());
    assert!(req.max_tokens.is_none());
}

#[test]
fn test_chat_request_builder() {
    let req = ChatRequest::new("llama-3.3-70b-versatile", vec![Message::user("test")])
        .with_temperature(0.4)
        .with_max_tokens(512);

    assert_eq!(req.temperature, Some(0.4));
    assert_eq!(req.max_tokens, Some(512));
}

#[test]
fn test_chat_request_omits_unset_sampling_params() {
    let req = ChatRequest::new("m", vec![]);
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("temperature").is_none());
    assert!(value.get("max_tokens").is_none());
    assert_eq!(value["stream"], false);
}

#[test]
fn test_chat_request_serializes_sampling_params() {
    let req = ChatRequest::new("m", vec![])
        .with_temperature(0.4)
        .with_max_tokens(512);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["max_tokens"], 512);
    assert!((value["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
}

// ChatResponse tests
#[test]
fn test_chat_response_completion() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [
            {
                "message": {"role": "assistant", "content": "  CLARITY_SCORE: 8\n"},
                "finish_reason": "stop"
            }
        ],
        "model": "llama-3.3-70b-versatile",
        "usage": {"prompt_tokens": 100, "completion_tokens": 20, "total_tokens": 120}
    }))
    .unwrap();

    assert_eq!(response.completion(), "CLARITY_SCORE: 8");
    assert_eq!(response.model.as_deref(), Some("llama-3.3-70b-versatile"));
    assert_eq!(response.usage.unwrap().total_tokens, Some(120));
}

#[test]
fn test_chat_response_completion_uses_first_choice() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [
            {"message": {"content": "first"}, "finish_reason": "stop"},
            {"message": {"content": "second"}, "finish_reason": "stop"}
        ]
    }))
    .unwrap();

    assert_eq!(response.completion(), "first");
}

#[test]
fn test_chat_response_completion_empty_choices() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": []
    }))
    .unwrap();

    assert_eq!(response.completion(), "");
}

#[test]
fn test_chat_response_completion_null_content() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": null}}]
    }))
    .unwrap();

    assert_eq!(response.completion(), "");
}
