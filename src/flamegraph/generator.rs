//! SVG flamegraph generation from folded stacks.
//!
//! Two renderers are supported:
//! - An external `flamegraph.pl`-compatible script fed through stdin
//! - The in-process inferno renderer, used when no script is available
//!
//! Both receive the same options (title, width, frame height, count name,
//! name type and the aqua palette).

use crate::folder::{folded_text, FoldedStack};
use crate::utils::config::{
    COUNT_NAME, DEFAULT_FRAME_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, FLAMEGRAPH_SCRIPT, NAME_TYPE,
    PALETTE,
};
use crate::utils::error::FlamegraphError;
use inferno::flamegraph::color::{BasicPalette, Palette};
use inferno::flamegraph::{self as inferno_flamegraph, Options};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,
    pub width: usize,
    pub frame_height: usize,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_frame_height(mut self, frame_height: usize) -> Self {
        self.frame_height = frame_height;
        self
    }

    /// Command-line flags understood by flamegraph.pl
    pub fn script_args(&self) -> Vec<String> {
        vec![
            "--title".to_string(),
            self.title.clone(),
            "--width".to_string(),
            self.width.to_string(),
            "--height".to_string(),
            self.frame_height.to_string(),
            "--countname".to_string(),
            COUNT_NAME.to_string(),
            "--nametype".to_string(),
            NAME_TYPE.to_string(),
            "--colors".to_string(),
            PALETTE.to_string(),
        ]
    }
}

/// Which program turns folded stacks into SVG
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    /// inferno, in-process
    Builtin,

    /// External flamegraph.pl-compatible program
    Script(PathBuf),
}

/// Pick a renderer
///
/// **Public** - called once per run
///
/// An explicit script that exists wins, then `flamegraph.pl` on `$PATH`,
/// then the built-in renderer.
pub fn resolve_renderer(explicit: Option<&Path>) -> Renderer {
    if let Some(script) = explicit {
        debug!("script: {}", script.display());
        if script.exists() {
            return Renderer::Script(script.to_path_buf());
        }
        warn!("Flamegraph script not found: {}", script.display());
    }

    match find_in_path(FLAMEGRAPH_SCRIPT) {
        Some(script) => Renderer::Script(script),
        None => {
            debug!("{} is not found in $PATH, using built-in renderer", FLAMEGRAPH_SCRIPT);
            Renderer::Builtin
        }
    }
}

/// Look up an executable file name in `$PATH`
fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    find_in_dirs(name, std::env::split_paths(&paths))
}

fn find_in_dirs(name: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Generate SVG flamegraph from folded stacks
///
/// **Public** - main entry point for rendering
///
/// # Returns
/// SVG document bytes
///
/// # Errors
/// * `FlamegraphError::EmptyStacks` - nothing to render
/// * Script spawn failures and non-zero exits
/// * I/O errors from the built-in renderer
pub fn generate_flamegraph(
    stacks: &[FoldedStack],
    config: Option<&FlamegraphConfig>,
    renderer: &Renderer,
) -> Result<Vec<u8>, FlamegraphError> {
    if stacks.is_empty() {
        return Err(FlamegraphError::EmptyStacks);
    }

    let config = config.cloned().unwrap_or_default();
    let data = folded_text(stacks);

    let svg = match renderer {
        Renderer::Builtin => {
            info!("Rendering flamegraph with {} stacks (built-in)", stacks.len());
            render_builtin(&data, &config)?
        }
        Renderer::Script(script) => {
            info!("Rendering flamegraph with {} stacks ({})", stacks.len(), script.display());
            render_with_script(script, &data, &config)?
        }
    };

    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn render_builtin(data: &str, config: &FlamegraphConfig) -> Result<Vec<u8>, FlamegraphError> {
    let mut options = Options::default();
    options.title = config.title.clone();
    options.image_width = Some(config.width);
    options.frame_height = config.frame_height;
    options.count_name = COUNT_NAME.to_string();
    options.name_type = NAME_TYPE.to_string();
    options.colors = Palette::Basic(BasicPalette::Aqua);

    let mut svg = Vec::new();
    inferno_flamegraph::from_lines(&mut options, data.lines(), &mut svg)
        .map_err(|e| FlamegraphError::Render(e.to_string()))?;
    Ok(svg)
}

fn render_with_script(
    script: &Path,
    data: &str,
    config: &FlamegraphConfig,
) -> Result<Vec<u8>, FlamegraphError> {
    let script_name = script.display().to_string();

    let mut child = Command::new(script)
        .args(config.script_args())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| FlamegraphError::ScriptSpawn {
            script: script_name.clone(),
            source,
        })?;

    // Feed stdin from a separate thread so a script writing early cannot block us
    let mut stdin = child.stdin.take().ok_or_else(|| {
        FlamegraphError::IoError(std::io::Error::other("script stdin unavailable"))
    })?;
    let input = data.as_bytes().to_vec();
    let feeder = std::thread::spawn(move || stdin.write_all(&input));

    let output = child.wait_with_output()?;

    match feeder.join() {
        Ok(Ok(())) => {}
        // The script may exit without reading everything; its status decides
        Ok(Err(e)) => debug!("Writing to {} failed: {}", script_name, e),
        Err(_) => {
            return Err(FlamegraphError::IoError(std::io::Error::other(
                "stdin writer thread panicked",
            )))
        }
    }

    if !output.status.success() {
        return Err(FlamegraphError::ScriptFailed {
            script: script_name,
            status: output.status,
        });
    }

    Ok(output.stdout)
}
