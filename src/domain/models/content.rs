//! Static page content
//!
//! Views only lay this data out; nothing here changes at runtime.

/// Images served from `public/assets/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteAsset {
    Sidebar,
    UniflashLogo,
    YesLogo,
    Ti3dLogo,
    TiWorkstation,
    TexasIcon,
    DisplayIcon,
    ConnectivityIcon,
    ApplicationsIcon,
}

impl SiteAsset {
    pub fn file_name(&self) -> &'static str {
        match self {
            SiteAsset::Sidebar => "sidebar.png",
            SiteAsset::UniflashLogo => "uniflash-logo.png",
            SiteAsset::YesLogo => "yes-logo.png",
            SiteAsset::Ti3dLogo => "ti-3d-logo.png",
            SiteAsset::TiWorkstation => "ti-workstation.png",
            SiteAsset::TexasIcon => "img1.png",
            SiteAsset::DisplayIcon => "img2.png",
            SiteAsset::ConnectivityIcon => "img3.png",
            SiteAsset::ApplicationsIcon => "img4.png",
        }
    }

    pub fn alt(&self) -> &'static str {
        match self {
            SiteAsset::Sidebar => "TI-OS Sidebar",
            SiteAsset::UniflashLogo => "Feature 1",
            SiteAsset::YesLogo => "Feature 2",
            SiteAsset::Ti3dLogo => "Feature 3",
            SiteAsset::TiWorkstation => "Feature 4",
            SiteAsset::TexasIcon => "Texas Icon",
            SiteAsset::DisplayIcon => "Display Icon",
            SiteAsset::ConnectivityIcon => "Connectivity Icon",
            SiteAsset::ApplicationsIcon => "Applications Icon",
        }
    }
}

/// One image slot on the home page; `slot` is the wrapper's position class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeTile {
    pub asset: SiteAsset,
    pub slot: &'static str,
}

pub const HOME_TOP_LEFT: HomeTile = HomeTile {
    asset: SiteAsset::UniflashLogo,
    slot: "top-left-1",
};

pub const HOME_TOP_RIGHT: HomeTile = HomeTile {
    asset: SiteAsset::YesLogo,
    slot: "top-right",
};

pub const HOME_BOTTOM: [HomeTile; 2] = [
    HomeTile {
        asset: SiteAsset::Ti3dLogo,
        slot: "center-1",
    },
    HomeTile {
        asset: SiteAsset::TiWorkstation,
        slot: "center-2",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCard {
    pub icon: SiteAsset,
    pub title: &'static str,
    pub text: &'static str,
}

pub const ABOUT_TITLE: &str = "TI-OS™ Features";

pub const ABOUT_INTRO: &str = "TI-OS™ offers a powerful platform for embedded system development, \
with advanced features and capabilities designed for the Texas Instruments ecosystem.";

pub const ABOUT_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        icon: SiteAsset::TexasIcon,
        title: "Texas Hardware Support",
        text: "Full support for Texas Instruments hardware platforms and microcontrollers with optimized drivers.",
    },
    FeatureCard {
        icon: SiteAsset::DisplayIcon,
        title: "Display & Input Systems",
        text: "Configurable interface with support for various input methods and display technologies.",
    },
    FeatureCard {
        icon: SiteAsset::ConnectivityIcon,
        title: "Connectivity Options",
        text: "Built-in support for various communication protocols including Wi-Fi, Bluetooth, and ethernet.",
    },
    FeatureCard {
        icon: SiteAsset::ApplicationsIcon,
        title: "Application Framework",
        text: "Rich set of APIs and libraries for building robust applications with minimal development time.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementGroup {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub const REQUIREMENT_GROUPS: [RequirementGroup; 2] = [
    RequirementGroup {
        heading: "Hardware",
        items: &[
            "TI MSP430 or ARM Cortex-M series",
            "Minimum 32KB Flash, 8KB RAM",
            "GPIO support for peripherals",
        ],
    },
    RequirementGroup {
        heading: "Development",
        items: &[
            "Code Composer Studio v10+",
            "TI-OS SDK version 2.1 or higher",
            "Compatible with standard JTAG debuggers",
        ],
    },
];

pub const DEVELOPMENT_TITLE: &str = "Building TI-OS";

pub const DEVELOPMENT_INTRO: &str = "TI-OS is a multi-application operating environment for the \
TI CC3200. A joystick-driven option screen launches each demo, and every demo hands control back \
to the menu when it exits.";

/// (label, value) rows describing the target board
pub const PLATFORM_FACTS: [(&str, &str); 6] = [
    ("Target", "TI CC3200 (ARM Cortex-M4)"),
    ("Display", "SSD1351 128×128 color OLED over SPI at 20 MHz"),
    ("Input", "ADC joystick and two GPIO push buttons"),
    ("Audio", "Buzzer-driven sound effects and looped theme music"),
    ("Language", "C90 on TI driverlib"),
    ("Version", "1.0.0"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceApp {
    pub name: &'static str,
    pub summary: &'static str,
    pub exit: &'static str,
}

/// Applications in option-screen order
pub const DEVICE_APPS: [DeviceApp; 6] = [
    DeviceApp {
        name: "Function Generator",
        summary: "Synthesizes selectable waveforms and previews them on the OLED.",
        exit: "Button 2 returns to the menu.",
    },
    DeviceApp {
        name: "Oscilloscope",
        summary: "Samples an ADC channel and plots the live trace.",
        exit: "Button 2 returns to the menu.",
    },
    DeviceApp {
        name: "AWS IoT",
        summary: "Connects over Wi-Fi and syncs state with an AWS IoT device shadow.",
        exit: "Hold both buttons to disconnect and return.",
    },
    DeviceApp {
        name: "Video Game",
        summary: "Side-scrolling platformer with animated sprites and a looping theme.",
        exit: "The game returns to the menu when a run ends.",
    },
    DeviceApp {
        name: "3D Cube",
        summary: "Real-time wireframe cube rotation steered by the joystick.",
        exit: "Button 2 returns to the menu.",
    },
    DeviceApp {
        name: "Servo Control",
        summary: "Drives a servo arm from joystick input with on-screen feedback.",
        exit: "Button 2 returns to the menu.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelperTool {
    pub script: &'static str,
    pub purpose: &'static str,
}

pub const HELPER_TOOLS: [HelperTool; 4] = [
    HelperTool {
        script: "image_bitmap_generator.py",
        purpose: "Turns artwork into C bitmap headers sized for the OLED.",
    },
    HelperTool {
        script: "bitmap_converter.py",
        purpose: "Converts animation frames into packed RGB565 arrays.",
    },
    HelperTool {
        script: "audio_to_melody.py",
        purpose: "Reduces audio clips to note/duration tables for the buzzer.",
    },
    HelperTool {
        script: "iot_shadow_client.py",
        purpose: "Reads and updates the device shadow from a workstation.",
    },
];
