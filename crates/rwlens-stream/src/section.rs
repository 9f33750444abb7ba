//! Section type codes.
//!
//! Every chunk is classified by a numeric type code. The known codes are
//! the core RenderWare sections, the toolkit plugin sections, and the
//! Rockstar extension sections found in the GTA-era games. Codes outside
//! the table are preserved as [`SectionType::Unknown`].

use std::fmt;

/// A chunk's section type: a known code or a preserved unknown one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    Struct,
    String,
    Extension,
    Camera,
    Texture,
    Material,
    MaterialList,
    AtomicSection,
    PlaneSection,
    World,
    Spline,
    Matrix,
    FrameList,
    Geometry,
    Clump,
    Light,
    UnicodeString,
    Atomic,
    TextureNative,
    TextureDictionary,
    AnimationDatabase,
    Image,
    SkinAnimation,
    GeometryList,
    AnimAnimation,
    Team,
    Crowd,
    DeltaMorphAnimation,
    RightToRender,
    MultiTextureEffectNative,
    MultiTextureEffectDictionary,
    TeamDictionary,
    PlatformIndependentTextureDictionary,
    TableOfContents,
    ParticleStandardGlobalData,
    AltPipe,
    PlatformIndependentPeds,
    PatchMesh,
    ChunkGroupStart,
    ChunkGroupEnd,
    UvAnimationDictionary,
    CollTree,
    // Toolkit plugin sections
    MorphPlg,
    SkinPlg,
    HAnimPlg,
    UserDataPlg,
    MaterialEffectsPlg,
    BinMeshPlg,
    NativeDataPlg,
    UvAnimationPlg,
    // Rockstar extension sections
    PipelineSet,
    SpecularMaterial,
    Effect2d,
    ExtraVertColour,
    CollisionModel,
    ReflectionMaterial,
    Breakable,
    Frame,
    /// A code with no entry in the table, preserved verbatim.
    Unknown(u32),
}

impl SectionType {
    /// Classify a numeric type code.
    pub fn from_code(code: u32) -> Self {
        match code {
            0x01 => Self::Struct,
            0x02 => Self::String,
            0x03 => Self::Extension,
            0x05 => Self::Camera,
            0x06 => Self::Texture,
            0x07 => Self::Material,
            0x08 => Self::MaterialList,
            0x09 => Self::AtomicSection,
            0x0A => Self::PlaneSection,
            0x0B => Self::World,
            0x0C => Self::Spline,
            0x0D => Self::Matrix,
            0x0E => Self::FrameList,
            0x0F => Self::Geometry,
            0x10 => Self::Clump,
            0x12 => Self::Light,
            0x13 => Self::UnicodeString,
            0x14 => Self::Atomic,
            0x15 => Self::TextureNative,
            0x16 => Self::TextureDictionary,
            0x17 => Self::AnimationDatabase,
            0x18 => Self::Image,
            0x19 => Self::SkinAnimation,
            0x1A => Self::GeometryList,
            0x1B => Self::AnimAnimation,
            0x1C => Self::Team,
            0x1D => Self::Crowd,
            0x1E => Self::DeltaMorphAnimation,
            0x1F => Self::RightToRender,
            0x20 => Self::MultiTextureEffectNative,
            0x21 => Self::MultiTextureEffectDictionary,
            0x22 => Self::TeamDictionary,
            0x23 => Self::PlatformIndependentTextureDictionary,
            0x24 => Self::TableOfContents,
            0x25 => Self::ParticleStandardGlobalData,
            0x26 => Self::AltPipe,
            0x27 => Self::PlatformIndependentPeds,
            0x28 => Self::PatchMesh,
            0x29 => Self::ChunkGroupStart,
            0x2A => Self::ChunkGroupEnd,
            0x2B => Self::UvAnimationDictionary,
            0x2C => Self::CollTree,
            0x0105 => Self::MorphPlg,
            0x0116 => Self::SkinPlg,
            0x011E => Self::HAnimPlg,
            0x011F => Self::UserDataPlg,
            0x0120 => Self::MaterialEffectsPlg,
            0x050E => Self::BinMeshPlg,
            0x0510 => Self::NativeDataPlg,
            0x0135 => Self::UvAnimationPlg,
            0x0253F2F3 => Self::PipelineSet,
            0x0253F2F6 => Self::SpecularMaterial,
            0x0253F2F8 => Self::Effect2d,
            0x0253F2F9 => Self::ExtraVertColour,
            0x0253F2FA => Self::CollisionModel,
            0x0253F2FC => Self::ReflectionMaterial,
            0x0253F2FD => Self::Breakable,
            0x0253F2FE => Self::Frame,
            other => Self::Unknown(other),
        }
    }

    /// Whether this code has no entry in the table.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// The table name for a known section, or `None` for unknown codes.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Self::Struct => "Struct",
            Self::String => "String",
            Self::Extension => "Extension",
            Self::Camera => "Camera",
            Self::Texture => "Texture",
            Self::Material => "Material",
            Self::MaterialList => "Material List",
            Self::AtomicSection => "Atomic Section",
            Self::PlaneSection => "Plane Section",
            Self::World => "World",
            Self::Spline => "Spline",
            Self::Matrix => "Matrix",
            Self::FrameList => "Frame List",
            Self::Geometry => "Geometry",
            Self::Clump => "Clump",
            Self::Light => "Light",
            Self::UnicodeString => "Unicode String",
            Self::Atomic => "Atomic",
            Self::TextureNative => "Texture Native",
            Self::TextureDictionary => "Texture Dictionary",
            Self::AnimationDatabase => "Animation Database",
            Self::Image => "Image",
            Self::SkinAnimation => "Skin Animation",
            Self::GeometryList => "Geometry List",
            Self::AnimAnimation => "Anim Animation",
            Self::Team => "Team",
            Self::Crowd => "Crowd",
            Self::DeltaMorphAnimation => "Delta Morph Animation",
            Self::RightToRender => "Right To Render",
            Self::MultiTextureEffectNative => "MultiTexture Effect Native",
            Self::MultiTextureEffectDictionary => "MultiTexture Effect Dictionary",
            Self::TeamDictionary => "Team Dictionary",
            Self::PlatformIndependentTextureDictionary => {
                "Platform Independent Texture Dictionary"
            }
            Self::TableOfContents => "Table Of Contents",
            Self::ParticleStandardGlobalData => "Particle Standard Global Data",
            Self::AltPipe => "AltPipe",
            Self::PlatformIndependentPeds => "Platform Independent Peds",
            Self::PatchMesh => "Patch Mesh",
            Self::ChunkGroupStart => "Chunk Group Start",
            Self::ChunkGroupEnd => "Chunk Group End",
            Self::UvAnimationDictionary => "UV Animation Dictionary",
            Self::CollTree => "Coll Tree",
            Self::MorphPlg => "Morph PLG",
            Self::SkinPlg => "Skin PLG",
            Self::HAnimPlg => "HAnim PLG",
            Self::UserDataPlg => "UserData PLG",
            Self::MaterialEffectsPlg => "Material Effects PLG",
            Self::BinMeshPlg => "Bin Mesh PLG",
            Self::NativeDataPlg => "Native Data PLG",
            Self::UvAnimationPlg => "UV Animation PLG",
            Self::PipelineSet => "Pipeline Set",
            Self::SpecularMaterial => "Specular Material",
            Self::Effect2d => "2d Effect",
            Self::ExtraVertColour => "Extra Vert Colour",
            Self::CollisionModel => "Collision Model",
            Self::ReflectionMaterial => "Reflection Material",
            Self::Breakable => "Breakable",
            Self::Frame => "Frame",
            Self::Unknown(_) => return None,
        };
        Some(name)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "Unknown (0x{:08X})", code),
            // name() is Some for every other variant
            other => f.write_str(other.name().unwrap_or("Unknown")),
        }
    }
}
