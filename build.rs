//! Build script for osu-cleaner
//!
//! Windows only: embeds the application manifest that enables long path
//! support. Beatmap set folders are named after artist and title, and
//! deeply nested storyboard assets inside them regularly push full paths
//! past the 260 character `MAX_PATH` limit.
//!
//! The manifest (`osu-cleaner.manifest`) sets `longPathAware=true`, which
//! together with the Windows 10 v1607+ registry setting allows paths up to
//! 32,767 characters. On other platforms this script does nothing.

fn main() {
    #[cfg(windows)]
    {
        // The .rc file references the manifest with the RT_MANIFEST resource type
        embed_resource::compile("osu-cleaner.rc", embed_resource::NONE);

        println!("cargo:rerun-if-changed=osu-cleaner.rc");
        println!("cargo:rerun-if-changed=osu-cleaner.manifest");
    }
}
