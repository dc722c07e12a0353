//! Window and context configuration.

use crate::error::Error;

/// Oldest OpenGL version the embedded shaders compile on (`#version 330 core`).
pub const MIN_GL_VERSION: (u8, u8) = (3, 3);

/// Everything the bootstrap needs to know before opening the window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    /// Whether the user may resize the window.
    pub resizable: bool,
    /// Requested OpenGL `(major, minor)` version. Always a core profile.
    pub gl_version: (u8, u8),
    /// Wait for display refresh on every buffer swap.
    pub vsync: bool,
    /// RGBA color the frame buffer is cleared to.
    pub clear_color: [f32; 4],
    /// Stop after this many presented frames. `None` runs until closed.
    pub max_frames: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "hello-glow".to_owned(),
            width: 800,
            height: 600,
            resizable: false,
            gl_version: MIN_GL_VERSION,
            vsync: true,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            max_frames: None,
        }
    }
}

impl WindowConfig {
    /// Check the config before any windowing or GL call is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidConfig("window title must not be empty"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig("window size must be non-zero"));
        }
        if self.gl_version < MIN_GL_VERSION {
            return Err(Error::InvalidConfig(
                "OpenGL 3.3 or newer is required for the embedded shaders",
            ));
        }
        if self.max_frames == Some(0) {
            return Err(Error::InvalidConfig("max_frames must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = WindowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.gl_version, (3, 3));
        assert!(config.vsync);
        assert!(!config.resizable);
        assert_eq!(config.max_frames, None);
    }

    #[test]
    fn rejects_zero_size() {
        let config = WindowConfig {
            height: 0,
            ..WindowConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn rejects_old_gl() {
        for gl_version in [(2, 1), (3, 2), (1, 9)] {
            let config = WindowConfig {
                gl_version,
                ..WindowConfig::default()
            };
            assert!(config.validate().is_err(), "{gl_version:?} accepted");
        }

        let newer = WindowConfig {
            gl_version: (4, 1),
            ..WindowConfig::default()
        };
        assert!(newer.validate().is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let config = WindowConfig {
            title: "   ".to_owned(),
            ..WindowConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_frame_limit() {
        let config = WindowConfig {
            max_frames: Some(0),
            ..WindowConfig::default()
        };
        assert!(config.validate().is_err());

        let one = WindowConfig {
            max_frames: Some(1),
            ..WindowConfig::default()
        };
        assert!(one.validate().is_ok());
    }
}
