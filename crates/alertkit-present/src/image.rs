//! Stretchable rounded backgrounds.
//!
//! The warning banner sits on a filled rounded rectangle. The generator
//! produces the smallest such shape (a `2r + 1` square) with cap insets equal
//! to the radius; [`StretchableImage::mesh_for`] stretches the middle row and
//! column to cover any frame while keeping the corners intact.

use lyon::geom::point;
use lyon::path::builder::BorderRadii;
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};
use log::warn;

use alertkit_core::{Color, EdgeInsets, Rect, Size};

/// A vertex for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Tessellated mesh ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of all vertices.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.vertices.first()?;
        let (mut min, mut max) = (first.position, first.position);
        for vertex in &self.vertices {
            min[0] = min[0].min(vertex.position[0]);
            min[1] = min[1].min(vertex.position[1]);
            max[0] = max[0].max(vertex.position[0]);
            max[1] = max[1].max(vertex.position[1]);
        }
        Some(Rect::new(
            min[0] as f64,
            min[1] as f64,
            (max[0] - min[0]) as f64,
            (max[1] - min[1]) as f64,
        ))
    }
}

/// A filled rounded shape that can be stretched to any frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StretchableImage {
    pub corner_radius: f64,
    pub fill: Color,
    /// Natural size of the shape
    pub size: Size,
    /// Regions that keep their size when stretched
    pub cap_insets: EdgeInsets,
    mesh: Mesh,
}

impl StretchableImage {
    /// The mesh at natural size.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The mesh stretched to cover `frame`.
    pub fn mesh_for(&self, frame: Rect) -> Mesh {
        let stretch = |value: f32, natural: f64, lead: f64, trail: f64, origin: f64, extent: f64| {
            let value = value as f64;
            let mapped = if value <= lead {
                origin + value
            } else if value >= natural - trail {
                origin + extent - (natural - value)
            } else {
                let middle = natural - lead - trail;
                let t = if middle > 0.0 { (value - lead) / middle } else { 0.0 };
                origin + lead + t * (extent - lead - trail)
            };
            mapped as f32
        };

        let insets = self.cap_insets;
        let vertices = self
            .mesh
            .vertices
            .iter()
            .map(|vertex| {
                let x = stretch(vertex.position[0], self.size.width, insets.left, insets.right, frame.x, frame.width);
                let y = stretch(vertex.position[1], self.size.height, insets.top, insets.bottom, frame.y, frame.height);
                Vertex::new(x, y, vertex.color)
            })
            .collect();

        Mesh {
            vertices,
            indices: self.mesh.indices.clone(),
        }
    }
}

/// Produces stretchable rounded backgrounds.
pub trait RoundedImageGenerator {
    fn generate(&self, corner_radius: f64, fill: Color) -> StretchableImage;
}

/// Generator backed by lyon fill tessellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TessellatedImageGenerator;

impl RoundedImageGenerator for TessellatedImageGenerator {
    fn generate(&self, corner_radius: f64, fill: Color) -> StretchableImage {
        let radius = corner_radius.max(0.0);
        let side = radius * 2.0 + 1.0;
        let color = [fill.r, fill.g, fill.b, fill.a];

        let path = build_rounded_rect_path(side as f32, radius as f32);
        let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();
        let result = FillTessellator::new().tessellate_path(
            &path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                Vertex::new(vertex.position().x, vertex.position().y, color)
            }),
        );

        let mesh = match result {
            Ok(()) => Mesh {
                vertices: buffers.vertices,
                indices: buffers.indices,
            },
            Err(err) => {
                warn!("rounded background tessellation failed: {:?}", err);
                Mesh::new()
            }
        };

        StretchableImage {
            corner_radius: radius,
            fill,
            size: Size::new(side, side),
            cap_insets: EdgeInsets::uniform(radius),
            mesh,
        }
    }
}

fn build_rounded_rect_path(side: f32, radius: f32) -> Path {
    let mut builder = Path::builder();
    let radii = BorderRadii {
        top_left: radius,
        top_right: radius,
        bottom_left: radius,
        bottom_right: radius,
    };
    let rect = lyon::geom::Box2D::new(point(0.0, 0.0), point(side, side));
    builder.add_rounded_rectangle(&rect, &radii, lyon::path::Winding::Positive);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rounded_square() {
        let fill = Color::rgb(1.0, 0.0, 0.0).with_alpha(0.1);
        let image = TessellatedImageGenerator.generate(5.0, fill);

        assert_eq!(image.size, Size::new(11.0, 11.0));
        assert_eq!(image.cap_insets, EdgeInsets::uniform(5.0));
        assert!(!image.mesh().is_empty());
        assert!(!image.mesh().indices.is_empty());
        assert!(image.mesh().vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 0.1]));

        let bounds = image.mesh().bounds().unwrap();
        assert!(bounds.x.abs() < 1e-3 && bounds.y.abs() < 1e-3);
        assert!((bounds.width - 11.0).abs() < 1e-3);
    }

    #[test]
    fn test_mesh_for_covers_frame() {
        let image = TessellatedImageGenerator.generate(5.0, Color::BLACK);
        let frame = Rect::new(52.0, 96.0, 166.0, 32.0);
        let mesh = image.mesh_for(frame);

        assert_eq!(mesh.indices, image.mesh().indices);
        let bounds = mesh.bounds().unwrap();
        assert!((bounds.x - 52.0).abs() < 1e-3);
        assert!((bounds.y - 96.0).abs() < 1e-3);
        assert!((bounds.right() - 218.0).abs() < 1e-3);
        assert!((bounds.bottom() - 128.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_radius() {
        let image = TessellatedImageGenerator.generate(0.0, Color::WHITE);
        assert_eq!(image.size, Size::new(1.0, 1.0));
        assert!(!image.mesh().is_empty());
    }
}
