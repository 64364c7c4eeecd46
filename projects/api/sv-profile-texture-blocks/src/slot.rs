//! Avatar slots and the fixed formats their textures are imported in.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use sv_profile_texture::TextureDimensions;

/// Block identifiers of one avatar slot.
///
/// The identifiers differ per save layout, so they are supplied by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SlotKeys {
    /// Buffer block holding the packed texture
    pub image: u32,
    /// Scalar block holding the declared width
    pub width: u32,
    /// Scalar block holding the declared height
    pub height: u32,
    /// Scalar block holding the declared texture size
    pub size: u32,
}

impl SlotKeys {
    /// Groups the four block identifiers of a slot.
    pub const fn new(image: u32, width: u32, height: u32, size: u32) -> Self {
        Self {
            image,
            width,
            height,
            size,
        }
    }
}

/// One of the avatar images a save keeps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum AvatarSlot {
    /// Profile picture currently shown
    CurrentProfilePicture,
    /// Profile icon currently shown
    CurrentProfileIcon,
    /// Profile picture taken when the save was created
    InitialProfilePicture,
    /// Profile icon taken when the save was created
    InitialProfileIcon,
}

impl AvatarSlot {
    /// Human readable slot name.
    pub const fn name(self) -> &'static str {
        match self {
            AvatarSlot::CurrentProfilePicture => "current profile picture",
            AvatarSlot::CurrentProfileIcon => "current profile icon",
            AvatarSlot::InitialProfilePicture => "initial profile picture",
            AvatarSlot::InitialProfileIcon => "initial profile icon",
        }
    }

    /// File name suggested when exporting this slot.
    pub const fn export_file_name(self) -> &'static str {
        match self {
            AvatarSlot::CurrentProfilePicture => "current_profile.png",
            AvatarSlot::CurrentProfileIcon => "current_icon.png",
            AvatarSlot::InitialProfilePicture => "initial_profile.png",
            AvatarSlot::InitialProfileIcon => "initial_icon.png",
        }
    }

    /// The format a picture must be imported in for this slot, if it accepts imports.
    ///
    /// Only the current slots can be replaced.
    pub const fn import_target(self) -> Option<ImportTarget> {
        match self {
            AvatarSlot::CurrentProfilePicture => Some(ImportTarget::ProfilePicture),
            AvatarSlot::CurrentProfileIcon => Some(ImportTarget::ProfileIcon),
            AvatarSlot::InitialProfilePicture | AvatarSlot::InitialProfileIcon => None,
        }
    }
}

impl fmt::Display for AvatarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed texture format written when importing a picture.
///
/// The metadata written alongside the texture does not describe the packed data exactly:
/// the declared width and height are 4× the picture's, and the declared size is the
/// packed length of the picture rather than the block length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum ImportTarget {
    /// 360×208 picture, declared 1440×832, 599040 bytes, in a 622080 byte block
    ProfilePicture,
    /// 56×56 picture, declared 224×224, 25088 bytes, in a 61952 byte block
    ProfileIcon,
}

impl ImportTarget {
    /// `(width, height)` the picture must be resized to before encoding.
    pub const fn image_size(self) -> (usize, usize) {
        match self {
            ImportTarget::ProfilePicture => (360, 208),
            ImportTarget::ProfileIcon => (56, 56),
        }
    }

    /// Dimensions written to the slot's width and height blocks.
    pub const fn declared_dimensions(self) -> TextureDimensions {
        match self {
            ImportTarget::ProfilePicture => TextureDimensions::new(1440, 832),
            ImportTarget::ProfileIcon => TextureDimensions::new(224, 224),
        }
    }

    /// Value written to the slot's size block.
    pub const fn declared_size(self) -> u32 {
        match self {
            ImportTarget::ProfilePicture => 599_040,
            ImportTarget::ProfileIcon => 25_088,
        }
    }

    /// Length of the texture buffer written to the slot.
    pub const fn block_len(self) -> usize {
        match self {
            ImportTarget::ProfilePicture => 622_080,
            ImportTarget::ProfileIcon => 61_952,
        }
    }

    /// Command line name.
    pub const fn name(self) -> &'static str {
        match self {
            ImportTarget::ProfilePicture => "picture",
            ImportTarget::ProfileIcon => "icon",
        }
    }
}

impl fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Implement FromStr to allow parsing from command line arguments
impl FromStr for ImportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "picture" | "profile-picture" => Ok(ImportTarget::ProfilePicture),
            "icon" | "profile-icon" => Ok(ImportTarget::ProfileIcon),
            _ => Err(alloc::format!(
                "Invalid import target: {s}. Valid targets are: picture, icon"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ImportTarget::ProfilePicture)]
    #[case(ImportTarget::ProfileIcon)]
    fn import_format_is_self_consistent(#[case] target: ImportTarget) {
        let (width, height) = target.image_size();
        let declared = target.declared_dimensions();

        assert_eq!(declared.output_width(), width);
        assert_eq!(declared.output_height(), height);
        // Encoded picture fits the block, and the declared size matches the packed length.
        assert!(declared.required_len() <= target.block_len());
        assert_eq!(declared.required_len(), target.declared_size() as usize);
    }

    #[test]
    fn only_current_slots_are_importable() {
        let importable: alloc::vec::Vec<_> = AvatarSlot::all_values()
            .iter()
            .filter(|slot| slot.import_target().is_some())
            .collect();
        assert_eq!(
            importable,
            [&AvatarSlot::CurrentProfilePicture, &AvatarSlot::CurrentProfileIcon]
        );
    }

    #[test]
    fn export_names_are_distinct() {
        let names: alloc::collections::BTreeSet<_> = AvatarSlot::all_values()
            .iter()
            .map(|slot| slot.export_file_name())
            .collect();
        assert_eq!(names.len(), AvatarSlot::all_values().len());
    }

    #[test]
    fn parses_import_targets() {
        assert_eq!("Picture".parse(), Ok(ImportTarget::ProfilePicture));
        assert_eq!("profile-icon".parse(), Ok(ImportTarget::ProfileIcon));
        assert!("banner".parse::<ImportTarget>().is_err());
        for &target in ImportTarget::all_values() {
            assert_eq!(target.to_string().parse(), Ok(target));
        }
    }
}
