//! Generating an identifier and writing both artifacts for it.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::{Uuid, Variant, Version};

use crate::artifact::{
    parse_build_var, parse_header, render_build_var, render_header, validate_name,
    BUILD_VAR_FILE, DEFAULT_NAME, HEADER_FILE,
};
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Where the artifacts go and what they are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Directory receiving `uuid.mk` and `uuid.h`.
    pub out_dir: PathBuf,
    /// Name of the make variable.
    pub var_name: String,
    /// Name of the header macro.
    pub macro_name: String,
}

impl EmitConfig {
    /// Default names, writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            var_name: DEFAULT_NAME.to_string(),
            macro_name: DEFAULT_NAME.to_string(),
        }
    }

    /// Path of the build variable fragment.
    #[must_use]
    pub fn build_var_path(&self) -> PathBuf {
        self.out_dir.join(BUILD_VAR_FILE)
    }

    /// Path of the header fragment.
    #[must_use]
    pub fn header_path(&self) -> PathBuf {
        self.out_dir.join(HEADER_FILE)
    }

    fn validate(&self) -> Result<()> {
        validate_name(&self.var_name)?;
        validate_name(&self.macro_name)
    }
}

/// The `include/` directory beside the running executable.
///
/// # Errors
///
/// Returns [`Error::CurrentExe`] if the executable cannot be located.
pub fn default_out_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::CurrentExe)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join("include"))
}

/// Outcome of a successful emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    /// The identifier written to both artifacts.
    pub uuid: Uuid,
    /// Where the build variable fragment was written.
    pub build_var_path: PathBuf,
    /// Where the header fragment was written.
    pub header_path: PathBuf,
}

/// Generates one identifier and writes the build variable and header for it.
///
/// Both artifacts are rendered before anything touches the disk. A missing
/// output directory fails the run before either file is written; existing
/// files are truncated and overwritten.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] for bad names, [`Error::NotRandomUuid`]
/// when the generator yields anything but a version-4 RFC 4122 UUID,
/// [`Error::MissingOutputDir`] when the directory is absent, and
/// [`Error::Io`] when a write fails.
pub fn generate_and_emit(ctx: &ServiceContext, config: &EmitConfig) -> Result<Emitted> {
    config.validate()?;

    let uuid = ctx.id_gen.generate_id()?;
    debug!(%uuid, "generated identifier");
    if uuid.get_version() != Some(Version::Random) || uuid.get_variant() != Variant::RFC4122 {
        warn!(%uuid, version = uuid.get_version_num(), "refusing to emit a non-random UUID");
        return Err(Error::NotRandomUuid(uuid));
    }

    let build_var = render_build_var(&config.var_name, uuid);
    let header = render_header(&config.macro_name, uuid);

    if !ctx.fs.is_dir(&config.out_dir) {
        return Err(Error::MissingOutputDir(config.out_dir.clone()));
    }

    let build_var_path = config.build_var_path();
    ctx.fs.write(&build_var_path, &build_var)?;
    debug!(path = %build_var_path.display(), "wrote build variable");

    let header_path = config.header_path();
    ctx.fs.write(&header_path, &header)?;
    debug!(path = %header_path.display(), "wrote header");

    info!(%uuid, out_dir = %config.out_dir.display(), "emitted TA identifier");
    Ok(Emitted { uuid, build_var_path, header_path })
}

/// Reads both artifacts back and checks they carry the same identifier
/// under the configured names.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Parse`] when an artifact is unreadable,
/// [`Error::Mismatch`] when a name differs from the configured one, and
/// [`Error::UuidMismatch`] when the identifiers differ.
pub fn verify(ctx: &ServiceContext, config: &EmitConfig) -> Result<Uuid> {
    config.validate()?;

    let (var_name, from_build_var) =
        parse_build_var(&ctx.fs.read_to_string(&config.build_var_path())?)?;
    let (macro_name, from_header) = parse_header(&ctx.fs.read_to_string(&config.header_path())?)?;

    if var_name != config.var_name {
        return Err(Error::Mismatch(format!(
            "build variable is named {var_name}, expected {}",
            config.var_name
        )));
    }
    if macro_name != config.macro_name {
        return Err(Error::Mismatch(format!(
            "header macro is named {macro_name}, expected {}",
            config.macro_name
        )));
    }
    if from_build_var != from_header {
        return Err(Error::UuidMismatch { build_var: from_build_var, header: from_header });
    }

    debug!(uuid = %from_build_var, "artifacts agree");
    Ok(from_build_var)
}
