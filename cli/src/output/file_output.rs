use anyhow::Result;
use image::{ImageBuffer, Rgb, Rgb32FImage};
use raytracing::color;
use std::path::PathBuf;

pub struct FileOutput {
    pub hdr_outdir: PathBuf,
    pub ldr_outdir: PathBuf,
    pub gamma: f32,
}

impl FileOutput {
    pub fn new(outdir: PathBuf, gamma: f32) -> Self {
        Self {
            hdr_outdir: outdir.join("hdr"),
            ldr_outdir: outdir.join("ldr"),
            gamma,
        }
    }

    pub fn commit(&self, image: &Rgb32FImage) -> Result<()> {
        std::fs::create_dir_all(&self.hdr_outdir)?;
        log::info!("Saving HDR image...");
        image.save(self.hdr_outdir.join("color.exr"))?;

        std::fs::create_dir_all(&self.ldr_outdir)?;
        log::info!("Saving LDR image...");
        let ldr: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
                color::to_ldr(*image.get_pixel(x, y), self.gamma)
            });
        ldr.save(self.ldr_outdir.join("color.png"))?;

        Ok(())
    }
}
