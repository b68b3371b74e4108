use filehooks::{
    BoxError, Encoding, FileLifecycleHooks, HookRegistry, HookSequence, OutputStream,
    RegistryError, chain, chain_all, chain_hooks,
    hooks::{FnHooks, LoggingHooks, NoopHooks, TracingHooks},
    testing::{CallLog, SpyHooks, TaggingHooks},
};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

mod common;
use common::{FailingHooks, StageFailed, write_through};

// ============================================================================
// Test Hooks
// ============================================================================

/// Writes a header line before any log event.
struct HeaderWriter(&'static str);

impl FileLifecycleHooks for HeaderWriter {
    fn on_file_opened(
        &self,
        mut underlying: OutputStream,
        _encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        writeln!(underlying, "{}", self.0)?;
        Ok(underlying)
    }
}

/// Removes `<file>.<extension>` alongside a deleted log file.
struct CompanionCleanup(&'static str);

impl FileLifecycleHooks for CompanionCleanup {
    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        let mut companion = path.as_os_str().to_owned();
        companion.push(".");
        companion.push(self.0);
        let companion = PathBuf::from(companion);
        if companion.exists() {
            fs::remove_file(companion)?;
        }
        Ok(())
    }
}

// ============================================================================
// File-backed pipelines
// ============================================================================

#[test]
fn test_header_then_wrapper_on_real_file() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let path = dir.join("app.log");

    let hooks = chain(HeaderWriter("# app log"), TaggingHooks::new("z"));
    let file: OutputStream = Box::new(fs::File::create(&path).unwrap());

    let mut stream = hooks.on_file_opened(file, Encoding::UTF_8).unwrap();
    stream.write_all(b"event").unwrap();
    stream.flush().unwrap();
    drop(stream);

    // The header was written by the inner stage straight to the file
    assert_eq!(fs::read_to_string(&path).unwrap(), "# app log\n<z>event</z>");
}

#[test]
fn test_companion_files_removed_in_chain_order() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let log_file = dir.join("app-001.log");
    for name in ["app-001.log", "app-001.log.gz", "app-001.log.idx"] {
        fs::write(dir.join(name), b"data").unwrap();
    }

    let log = CallLog::new();
    let hooks = chain_hooks![
        CompanionCleanup("gz"),
        log.hook("audit"),
        CompanionCleanup("idx"),
    ];

    hooks.on_file_deleting(&log_file).unwrap();

    assert!(!dir.join("app-001.log.gz").exists());
    assert!(!dir.join("app-001.log.idx").exists());
    assert!(log_file.exists());
    assert_eq!(log.labels(), vec!["audit"]);
}

#[test]
fn test_deletion_stops_after_failing_stage() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let log_file = dir.join("app.log");
    fs::write(dir.join("app.log.idx"), b"index").unwrap();

    let hooks = chain(FailingHooks("audit"), CompanionCleanup("idx"));

    let err = hooks.on_file_deleting(&log_file).unwrap_err();

    assert_eq!(err.downcast_ref::<StageFailed>(), Some(&StageFailed("audit")));
    assert!(dir.join("app.log.idx").exists());
}

// ============================================================================
// N-ary helpers
// ============================================================================

#[test]
fn test_helpers_agree_with_pairwise_chaining() {
    let pairwise = chain(
        chain(TaggingHooks::new("a"), TaggingHooks::new("b")),
        TaggingHooks::new("c"),
    );
    let expected = write_through(&pairwise, "x");

    let by_macro = chain_hooks![
        TaggingHooks::new("a"),
        TaggingHooks::new("b"),
        TaggingHooks::new("c")
    ];
    let by_fold = chain_all(["a", "b", "c"].map(|tag| TaggingHooks::new(tag).boxed()));
    let by_sequence = HookSequence::new()
        .then(TaggingHooks::new("a"))
        .then(TaggingHooks::new("b"))
        .then(TaggingHooks::new("c"));

    assert_eq!(write_through(&by_macro, "x"), expected);
    assert_eq!(write_through(&by_fold, "x"), expected);
    assert_eq!(write_through(&by_sequence, "x"), expected);
}

#[test]
fn test_boxed_hooks_chain_with_concrete_ones() {
    let spy = SpyHooks::new();
    let boxed = spy.clone().boxed();
    let hooks = chain(boxed, FnHooks::new()).chain_to(NoopHooks);

    hooks.on_file_deleting(Path::new("x.log")).unwrap();
    let _stream = hooks
        .on_file_opened(Box::new(std::io::sink()), Encoding::UTF_8)
        .unwrap();

    assert_eq!(spy.deleting_count(), 1);
    assert_eq!(spy.opened_count(), 1);
}

#[test]
fn test_observers_are_transparent() {
    let hooks = chain(
        TracingHooks::new(TaggingHooks::new("t"), "tagging"),
        LoggingHooks,
    );

    assert_eq!(write_through(&hooks, "x"), "<t>x</t>");
    assert!(hooks.on_file_deleting(Path::new("x.log")).is_ok());
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_builds_configured_pipeline() {
    let registry = HookRegistry::new()
        .with("header", || Ok(HeaderWriter("# header").boxed()))
        .unwrap()
        .with("tag", || Ok(TaggingHooks::new("t").boxed()))
        .unwrap();

    let configured = ["header", "tag"];
    let hooks = registry.build(configured).unwrap();

    assert_eq!(write_through(&hooks, "x"), "# header\n<t>x</t>");
}

#[test]
fn test_registry_rejects_unknown_names() {
    let registry = HookRegistry::new()
        .with("tag", || Ok(TaggingHooks::new("t").boxed()))
        .unwrap();

    let err = registry.build(["tag", "gzip"]).err().unwrap();

    assert!(matches!(err, RegistryError::UnknownHook(ref name) if name == "gzip"));
    assert_eq!(err.to_string(), "no hook registered under name: gzip");
}
