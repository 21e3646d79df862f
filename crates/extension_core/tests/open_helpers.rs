use std::{
    fs,
    path::{Path, PathBuf},
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

use extension_core::{
    FileOpener, OpenHelperConfig, OpenOutcome, FILE_OPEN_FAILED_MESSAGE, INVALID_DATA_URI_MESSAGE,
};
use futures::executor::block_on;
use host_bridge::{
    EditorTab, ExtensionContext, HostBridgeClients, HostProviderError, HostProviderRegistry,
    MemoryEditorHost, OutputChannel, RecordingWindowClient, ShowMessageType, ViewColumn,
    WebviewProvider, WebviewProviderFactory, WebviewProviderType,
};

const PNG_HEADER_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

fn unique_temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!(
        "extension-core-{label}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("read temp dir")
        .map(|entry| entry.expect("dir entry").path())
        .collect()
}

fn unused_webview_factory() -> WebviewProviderFactory {
    Rc::new(
        |_context: &ExtensionContext,
         _output: Rc<dyn OutputChannel>,
         _provider_type: WebviewProviderType|
         -> Rc<dyn WebviewProvider> { unreachable!("open helpers never create webviews") },
    )
}

struct Harness {
    registry: HostProviderRegistry,
    window: RecordingWindowClient,
    editor: MemoryEditorHost,
}

impl Harness {
    fn new(editor: MemoryEditorHost) -> Self {
        let window = RecordingWindowClient::default();
        let registry = HostProviderRegistry::new();
        registry.initialize(
            unused_webview_factory(),
            Rc::new(HostBridgeClients::new(Rc::new(window.clone()))),
        );
        Self {
            registry,
            window,
            editor,
        }
    }

    fn opener(&self, config: OpenHelperConfig) -> FileOpener<'_> {
        FileOpener::new(&self.registry, &self.editor, config)
    }

    fn error_messages(&self) -> Vec<String> {
        self.window
            .messages()
            .into_iter()
            .filter(|request| request.kind == ShowMessageType::Error)
            .map(|request| request.message)
            .collect()
    }
}

#[test]
fn invalid_data_uri_reports_one_error_and_writes_nothing() {
    let dir = unique_temp_dir("invalid-uri");
    let harness = Harness::new(MemoryEditorHost::default());

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::with_temp_dir(&dir))
            .open_image("not-a-data-uri"),
    )
    .expect("registry ready");

    assert_eq!(
        outcome,
        OpenOutcome::ErrorReported {
            message: INVALID_DATA_URI_MESSAGE.to_string()
        }
    );
    assert_eq!(harness.error_messages(), vec![INVALID_DATA_URI_MESSAGE]);
    assert!(dir_entries(&dir).is_empty());
    assert!(harness.editor.opened_resources().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn undecodable_payload_reports_invalid_uri_and_writes_nothing() {
    let dir = unique_temp_dir("bad-payload");
    let harness = Harness::new(MemoryEditorHost::default());

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::with_temp_dir(&dir))
            .open_image("data:image/png;base64,@@@"),
    )
    .expect("registry ready");

    assert_eq!(
        outcome,
        OpenOutcome::ErrorReported {
            message: INVALID_DATA_URI_MESSAGE.to_string()
        }
    );
    assert_eq!(harness.window.messages().len(), 1);
    assert_eq!(harness.error_messages(), vec![INVALID_DATA_URI_MESSAGE]);
    assert!(dir_entries(&dir).is_empty());
    assert!(harness.editor.opened_resources().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn valid_image_is_decoded_and_opened_without_notifications() {
    let dir = unique_temp_dir("valid-image");
    let harness = Harness::new(MemoryEditorHost::default());

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::with_temp_dir(&dir))
            .open_image(PNG_HEADER_URI),
    )
    .expect("registry ready");

    let OpenOutcome::Shown { path } = outcome else {
        panic!("expected image to be shown, got {outcome:?}");
    };
    assert_eq!(path.parent(), Some(dir.as_path()));
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("png"));
    assert_eq!(
        fs::read(&path).expect("read image"),
        vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']
    );
    assert_eq!(harness.editor.opened_resources(), vec![path]);
    assert!(harness.window.messages().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn image_open_failure_reports_error_and_keeps_temp_file() {
    let dir = unique_temp_dir("image-open-fails");
    let editor = MemoryEditorHost::default();
    editor.fail_open_resource("no image viewer");
    let harness = Harness::new(editor);

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::with_temp_dir(&dir))
            .open_image(PNG_HEADER_URI),
    )
    .expect("registry ready");

    let errors = harness.error_messages();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].starts_with("Error opening image: "),
        "message={}",
        errors[0]
    );
    assert!(errors[0].contains("no image viewer"), "message={}", errors[0]);
    assert_eq!(
        outcome,
        OpenOutcome::ErrorReported {
            message: errors[0].clone()
        }
    );
    assert_eq!(dir_entries(&dir).len(), 1);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unwritable_temp_dir_reports_image_error() {
    let dir = unique_temp_dir("missing-parent");
    let harness = Harness::new(MemoryEditorHost::default());

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::with_temp_dir(dir.join("does-not-exist")))
            .open_image(PNG_HEADER_URI),
    )
    .expect("registry ready");

    assert!(
        matches!(&outcome, OpenOutcome::ErrorReported { message } if message.starts_with("Error opening image: ")),
        "outcome={outcome:?}"
    );
    assert_eq!(harness.error_messages().len(), 1);
    assert!(harness.editor.opened_resources().is_empty());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn helpers_fail_loudly_before_registry_initialization() {
    let registry = HostProviderRegistry::new();
    let editor = MemoryEditorHost::default();
    let opener = FileOpener::new(&registry, &editor, OpenHelperConfig::default());

    assert_eq!(
        block_on(opener.open_image(PNG_HEADER_URI)),
        Err(HostProviderError::Uninitialized)
    );
    assert_eq!(
        block_on(opener.open_file(Path::new("/work/main.rs"))),
        Err(HostProviderError::Uninitialized)
    );
    assert!(editor.opened_resources().is_empty());
    assert!(editor.opened_documents().is_empty());
}

#[test]
fn open_file_without_existing_tab_shows_non_preview_document() {
    let harness = Harness::new(MemoryEditorHost::default());

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::default())
            .open_file(Path::new("/work/src/main.rs")),
    )
    .expect("registry ready");

    assert_eq!(
        outcome,
        OpenOutcome::Shown {
            path: PathBuf::from("/work/src/main.rs")
        }
    );
    assert_eq!(
        harness.editor.opened_documents(),
        vec![PathBuf::from("/work/src/main.rs")]
    );
    let shown = harness.window.text_documents();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].path, "/work/src/main.rs");
    assert!(!shown[0].options.preview);
    assert!(harness.window.messages().is_empty());
}

#[test]
fn open_file_closes_clean_duplicate_in_other_column_then_opens() {
    let editor = MemoryEditorHost::default()
        .with_tab_group(ViewColumn(1), vec![EditorTab::text("/work/lib.rs")])
        .with_tab_group(ViewColumn(2), vec![EditorTab::text("/work/main.rs")])
        .with_active_view_column(ViewColumn(2));
    let harness = Harness::new(editor);

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::default())
            .open_file(Path::new("/work/lib.rs")),
    )
    .expect("registry ready");

    assert!(matches!(outcome, OpenOutcome::Shown { .. }), "outcome={outcome:?}");
    assert_eq!(
        harness.editor.closed_tabs(),
        vec![EditorTab::text("/work/lib.rs")]
    );
    assert_eq!(harness.window.text_documents().len(), 1);
}

#[test]
fn open_file_keeps_dirty_duplicate() {
    let editor = MemoryEditorHost::default()
        .with_tab_group(ViewColumn(1), vec![EditorTab::text("/work/lib.rs").dirty()])
        .with_active_view_column(ViewColumn(2));
    let harness = Harness::new(editor);

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::default())
            .open_file(Path::new("/work/lib.rs")),
    )
    .expect("registry ready");

    assert!(matches!(outcome, OpenOutcome::Shown { .. }), "outcome={outcome:?}");
    assert!(harness.editor.closed_tabs().is_empty());
    assert_eq!(harness.window.text_documents().len(), 1);
}

#[test]
fn dedup_failures_never_block_the_open() {
    let broken_enumeration = MemoryEditorHost::default();
    broken_enumeration.fail_tab_groups("tabs unavailable");

    let broken_close = MemoryEditorHost::default()
        .with_tab_group(ViewColumn(1), vec![EditorTab::text("/work/lib.rs")])
        .with_active_view_column(ViewColumn(2));
    broken_close.fail_close_tab("tab locked");

    for editor in [broken_enumeration, broken_close] {
        let harness = Harness::new(editor);
        let outcome = block_on(
            harness
                .opener(OpenHelperConfig::default())
                .open_file(Path::new("/work/lib.rs")),
        )
        .expect("registry ready");

        assert!(matches!(outcome, OpenOutcome::Shown { .. }), "outcome={outcome:?}");
        assert!(harness.window.messages().is_empty());
        assert_eq!(harness.window.text_documents().len(), 1);
    }
}

#[test]
fn document_load_failure_reports_generic_error_without_showing() {
    let editor = MemoryEditorHost::default();
    editor.fail_open_text_document("ENOENT: no such file");
    let harness = Harness::new(editor);

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::default())
            .open_file(Path::new("/work/missing.rs")),
    )
    .expect("registry ready");

    assert_eq!(
        outcome,
        OpenOutcome::ErrorReported {
            message: FILE_OPEN_FAILED_MESSAGE.to_string()
        }
    );
    assert_eq!(harness.error_messages(), vec![FILE_OPEN_FAILED_MESSAGE]);
    assert!(harness.window.text_documents().is_empty());
}

#[test]
fn show_failure_reports_generic_error_once() {
    let harness = Harness::new(MemoryEditorHost::default());
    harness.window.fail_show_text_document("webview closed");

    let outcome = block_on(
        harness
            .opener(OpenHelperConfig::default())
            .open_file(Path::new("/work/main.rs")),
    )
    .expect("registry ready");

    assert_eq!(
        outcome,
        OpenOutcome::ErrorReported {
            message: FILE_OPEN_FAILED_MESSAGE.to_string()
        }
    );
    assert_eq!(harness.error_messages(), vec![FILE_OPEN_FAILED_MESSAGE]);
    assert_eq!(harness.window.text_documents().len(), 1);
}
