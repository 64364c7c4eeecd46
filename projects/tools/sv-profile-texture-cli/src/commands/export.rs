use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
#[cfg(feature = "multithreaded")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use bytesize::ByteSize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use sv_profile_texture::{blend, BlendStrategy, TextureDimensions};

#[derive(FromArgs, Debug)]
/// Render a packed avatar texture block dump to a picture
#[argh(subcommand, name = "export")]
pub struct ExportCmd {
    /// texture block dump path
    #[argh(option)]
    pub input: PathBuf,

    /// declared texture width, as stored in the slot's width block
    #[argh(option)]
    pub width: usize,

    /// declared texture height, as stored in the slot's height block
    #[argh(option)]
    pub height: usize,

    /// output picture path (.png, .bmp, .jpg)
    #[argh(option)]
    pub output: PathBuf,

    /// blend strategy (light-only, dark-only, light-mask, dark-mask, masked-composite,
    /// channel-average, dual-mask-alpha-blend) [default: dual-mask-alpha-blend]
    #[argh(option)]
    pub blend: Option<BlendStrategy>,

    /// render every blend strategy to `<output stem>.<strategy>.<ext>`
    #[argh(switch)]
    pub all_strategies: bool,
}

pub fn handle_export_command(cmd: ExportCmd) -> Result<(), CliError> {
    let dims = TextureDimensions::new(cmd.width, cmd.height);
    let buffer = read_dump(&cmd.input)?;
    log::info!(
        "Read {} from {}",
        ByteSize(buffer.len() as u64),
        cmd.input.display()
    );
    if buffer.len() > dims.required_len() {
        log::debug!(
            "Ignoring {} trailing bytes past the {}x{} texture",
            buffer.len() - dims.required_len(),
            dims.output_width(),
            dims.output_height()
        );
    }

    let start = Instant::now();
    if cmd.all_strategies {
        let strategies = BlendStrategy::all_values();

        #[cfg(feature = "multithreaded")]
        let results: Vec<_> = strategies
            .par_iter()
            .map(|&strategy| export_strategy(&buffer, dims, strategy, &cmd.output))
            .collect();
        #[cfg(not(feature = "multithreaded"))]
        let results: Vec<_> = strategies
            .iter()
            .map(|&strategy| export_strategy(&buffer, dims, strategy, &cmd.output))
            .collect();

        for result in results {
            result?;
        }
    } else {
        let strategy = cmd.blend.unwrap_or_default();
        let image = blend(&buffer, dims, strategy)?;
        save_image(&image, &cmd.output)?;
        println!("Wrote {} using {strategy}", cmd.output.display());
    }

    log::info!("Export completed in {:.2?}", start.elapsed());
    Ok(())
}

fn export_strategy(
    buffer: &[u8],
    dims: TextureDimensions,
    strategy: BlendStrategy,
    output: &Path,
) -> Result<(), CliError> {
    let path = strategy_output_path(output, strategy.name());
    let image = blend(buffer, dims, strategy)?;
    save_image(&image, &path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
