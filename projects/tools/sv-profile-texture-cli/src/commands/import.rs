use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bytesize::ByteSize;
use std::path::PathBuf;
use sv_profile_texture::encode_image;
use sv_profile_texture_blocks::ImportTarget;

#[derive(FromArgs, Debug)]
/// Encode a picture into a texture block dump for the profile picture or icon
#[argh(subcommand, name = "import")]
pub struct ImportCmd {
    /// picture to import (any format the image crate can decode)
    #[argh(option)]
    pub input: PathBuf,

    /// slot format to encode for (picture, icon)
    #[argh(option)]
    pub target: ImportTarget,

    /// output texture block dump path
    #[argh(option)]
    pub output: PathBuf,
}

pub fn handle_import_command(cmd: ImportCmd) -> Result<(), CliError> {
    let (width, height) = cmd.target.image_size();
    let image = load_image(&cmd.input, width, height)?;
    let data = encode_image(&image, cmd.target.block_len())?;
    write_dump(&cmd.output, &data)?;

    log::info!(
        "Encoded {} as the profile {} ({})",
        cmd.input.display(),
        cmd.target,
        ByteSize(data.len() as u64)
    );

    // The dump alone is not enough: the slot's metadata blocks must match it.
    let declared = cmd.target.declared_dimensions();
    println!("Wrote {}", cmd.output.display());
    println!("  width block:  {}", declared.width);
    println!("  height block: {}", declared.height);
    println!("  size block:   {}", cmd.target.declared_size());
    Ok(())
}
