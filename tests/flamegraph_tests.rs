use du_flamegraph::flamegraph::{generate_flamegraph, FlamegraphConfig, Renderer};
use du_flamegraph::folder::FoldedStack;
use du_flamegraph::utils::error::FlamegraphError;
use std::path::PathBuf;

fn sample_stacks() -> Vec<FoldedStack> {
    vec![
        FoldedStack::new("/data".to_string(), 100),
        FoldedStack::new("/data;a".to_string(), 10),
        FoldedStack::new("/data;a;b".to_string(), 1536),
    ]
}

#[test]
fn test_builtin_renderer_produces_svg() {
    let config = FlamegraphConfig::new().with_title("usage of /data");
    let svg = generate_flamegraph(&sample_stacks(), Some(&config), &Renderer::Builtin).unwrap();
    let svg = String::from_utf8(svg).unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("usage of /data"));
}

#[test]
fn test_empty_stacks() {
    let result = generate_flamegraph(&[], None, &Renderer::Builtin);
    assert!(matches!(result, Err(FlamegraphError::EmptyStacks)));
}

#[test]
fn test_missing_script_fails_to_spawn() {
    let renderer = Renderer::Script(PathBuf::from("/nonexistent/flamegraph.pl"));
    let result = generate_flamegraph(&sample_stacks(), None, &renderer);
    assert!(matches!(result, Err(FlamegraphError::ScriptSpawn { .. })));
}

#[cfg(unix)]
mod script {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("flamegraph.pl");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_script_receives_folded_stdin() {
        let temp = tempfile::tempdir().unwrap();
        let script = write_script(temp.path(), "cat");

        let out = generate_flamegraph(&sample_stacks(), None, &Renderer::Script(script)).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/data 100.00\n/data;a 10.00\n/data;a;b 1536.00\n"
        );
    }

    #[test]
    fn test_script_receives_options() {
        let temp = tempfile::tempdir().unwrap();
        let script = write_script(temp.path(), "cat > /dev/null; echo \"$@\"");
        let config = FlamegraphConfig::new().with_width(640).with_frame_height(12);

        let out = generate_flamegraph(&sample_stacks(), Some(&config), &Renderer::Script(script))
            .unwrap();
        let args = String::from_utf8(out).unwrap();

        assert!(args.contains("--width 640"));
        assert!(args.contains("--height 12"));
        assert!(args.contains("--countname bytes"));
        assert!(args.contains("--colors aqua"));
    }

    #[test]
    fn test_script_failure_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let script = write_script(temp.path(), "exit 3");

        let result = generate_flamegraph(&sample_stacks(), None, &Renderer::Script(script));

        assert!(matches!(result, Err(FlamegraphError::ScriptFailed { .. })));
    }
}
