//! Window client trait plus no-op and recording adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use super::types::{
    ShowMessageRequest, ShowMessageResponse, ShowTextDocumentRequest, TextEditorInfo,
};
use crate::HostBridgeError;

/// Object-safe boxed future used by host bridge sub-clients.
pub type HostBridgeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Stateless request/response stub for host window operations.
pub trait WindowClient {
    /// Renders a notification. Callers treat failures as best-effort and never retry.
    fn show_message<'a>(
        &'a self,
        request: ShowMessageRequest,
    ) -> HostBridgeFuture<'a, Result<ShowMessageResponse, HostBridgeError>>;

    /// Opens or focuses an editor-like view for `request.path`.
    fn show_text_document<'a>(
        &'a self,
        request: ShowTextDocumentRequest,
    ) -> HostBridgeFuture<'a, Result<TextEditorInfo, HostBridgeError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Window client for hosts without window operations.
///
/// Notifications are accepted and dropped; document requests report
/// [`HostBridgeError::Unavailable`].
pub struct NoopWindowClient;

impl WindowClient for NoopWindowClient {
    fn show_message<'a>(
        &'a self,
        _request: ShowMessageRequest,
    ) -> HostBridgeFuture<'a, Result<ShowMessageResponse, HostBridgeError>> {
        Box::pin(async { Ok(ShowMessageResponse::default()) })
    }

    fn show_text_document<'a>(
        &'a self,
        _request: ShowTextDocumentRequest,
    ) -> HostBridgeFuture<'a, Result<TextEditorInfo, HostBridgeError>> {
        Box::pin(async {
            Err(HostBridgeError::Unavailable {
                operation: "showTextDocument",
            })
        })
    }
}

#[derive(Debug, Default)]
struct RecordedWindowCalls {
    messages: Vec<ShowMessageRequest>,
    text_documents: Vec<ShowTextDocumentRequest>,
    message_failure: Option<String>,
    text_document_failure: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory window client that records every request it receives.
///
/// Clones share the same call log, so a test can keep one handle while the registry owns another.
pub struct RecordingWindowClient {
    inner: Rc<RefCell<RecordedWindowCalls>>,
}

impl RecordingWindowClient {
    /// Makes every subsequent `show_message` call fail with `reason`.
    pub fn fail_show_message(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().message_failure = Some(reason.into());
    }

    /// Makes every subsequent `show_text_document` call fail with `reason`.
    pub fn fail_show_text_document(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().text_document_failure = Some(reason.into());
    }

    /// Returns every notification request received, including failed deliveries.
    pub fn messages(&self) -> Vec<ShowMessageRequest> {
        self.inner.borrow().messages.clone()
    }

    /// Returns every show-text-document request received, including failed ones.
    pub fn text_documents(&self) -> Vec<ShowTextDocumentRequest> {
        self.inner.borrow().text_documents.clone()
    }
}

impl WindowClient for RecordingWindowClient {
    fn show_message<'a>(
        &'a self,
        request: ShowMessageRequest,
    ) -> HostBridgeFuture<'a, Result<ShowMessageResponse, HostBridgeError>> {
        Box::pin(async move {
            let mut calls = self.inner.borrow_mut();
            calls.messages.push(request);
            match &calls.message_failure {
                Some(reason) => Err(HostBridgeError::rejected("showMessage", reason.clone())),
                None => Ok(ShowMessageResponse::default()),
            }
        })
    }

    fn show_text_document<'a>(
        &'a self,
        request: ShowTextDocumentRequest,
    ) -> HostBridgeFuture<'a, Result<TextEditorInfo, HostBridgeError>> {
        Box::pin(async move {
            let mut calls = self.inner.borrow_mut();
            let info = TextEditorInfo {
                document_path: request.path.clone(),
                view_column: request.options.view_column,
                is_active: !request.options.preserve_focus.unwrap_or(false),
            };
            calls.text_documents.push(request);
            match &calls.text_document_failure {
                Some(reason) => Err(HostBridgeError::rejected(
                    "showTextDocument",
                    reason.clone(),
                )),
                None => Ok(info),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{ShowMessageType, ShowTextDocumentOptions};

    fn document(path: &str) -> ShowTextDocumentRequest {
        ShowTextDocumentRequest {
            path: path.to_string(),
            options: ShowTextDocumentOptions::default(),
        }
    }

    #[test]
    fn noop_window_client_accepts_messages_and_rejects_documents() {
        let client = NoopWindowClient;
        let client_obj: &dyn WindowClient = &client;

        assert_eq!(
            block_on(client_obj.show_message(ShowMessageRequest::warning("hi"))).expect("message"),
            ShowMessageResponse::default()
        );
        assert_eq!(
            block_on(client_obj.show_text_document(document("/a.txt")))
                .expect_err("documents are unavailable"),
            HostBridgeError::Unavailable {
                operation: "showTextDocument"
            }
        );
    }

    #[test]
    fn recording_window_client_logs_requests_across_clones() {
        let client = RecordingWindowClient::default();
        let handle = client.clone();
        let client_obj: &dyn WindowClient = &client;

        block_on(client_obj.show_message(ShowMessageRequest::error("boom"))).expect("message");
        let info = block_on(client_obj.show_text_document(document("/work/a.rs"))).expect("show");

        assert_eq!(info.document_path, "/work/a.rs");
        assert!(info.is_active);
        let messages = handle.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, ShowMessageType::Error);
        assert_eq!(handle.text_documents(), vec![document("/work/a.rs")]);
    }

    #[test]
    fn recording_window_client_records_failed_calls() {
        let client = RecordingWindowClient::default();
        client.fail_show_message("renderer gone");
        client.fail_show_text_document("editor closed");

        let err = block_on(client.show_message(ShowMessageRequest::information("x")))
            .expect_err("message should fail");
        assert_eq!(err.operation(), "showMessage");
        block_on(client.show_text_document(document("/b.rs"))).expect_err("show should fail");

        assert_eq!(client.messages().len(), 1);
        assert_eq!(client.text_documents().len(), 1);
    }
}
