//! Volume listing.

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use doss_shared::errors::DossResult;

use crate::directory::{Volume, VolumeDirectory};
use crate::sink::OutputSink;

pub const HEADER: [&str; 3] = ["Driver", "Name", "Mountpoint"];

/// One row per volume, in the given order.
pub fn volume_table(volumes: &[Volume]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(HEADER.to_vec());

    for volume in volumes {
        table.add_row(vec![
            volume.driver.clone(),
            volume.name.clone(),
            volume.mountpoint.display().to_string(),
        ]);
    }
    table
}

pub async fn list_volumes<D>(directory: &D, sink: &OutputSink) -> DossResult<()>
where
    D: VolumeDirectory + ?Sized,
{
    let volumes = directory.list_volumes().await?;
    for line in volume_table(&volumes).lines() {
        sink.write_line(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::testing::FakeDirectory;

    #[tokio::test]
    async fn test_rows_follow_directory_order() {
        let directory = FakeDirectory::with_volumes(vec![
            Volume::new("local", "zeta", "/var/lib/docker/volumes/zeta/_data"),
            Volume::new("nfs", "alpha", "/mnt/nfs/alpha"),
        ]);
        let (sink, captured) = OutputSink::in_memory();

        list_volumes(&directory, &sink).await.unwrap();

        let lines = captured.lines();
        let header = lines.iter().position(|l| l.contains("Mountpoint")).unwrap();
        let zeta = lines.iter().position(|l| l.contains("zeta")).unwrap();
        let alpha = lines.iter().position(|l| l.contains("alpha")).unwrap();
        assert!(header < zeta && zeta < alpha);
        assert!(lines[zeta].contains("local"));
        assert!(lines[alpha].contains("/mnt/nfs/alpha"));
    }

    #[tokio::test]
    async fn test_empty_directory_renders_header_only() {
        let directory = FakeDirectory::default();
        let (sink, captured) = OutputSink::in_memory();

        list_volumes(&directory, &sink).await.unwrap();

        let contents = captured.contents();
        for column in HEADER {
            assert!(contents.contains(column));
        }
        assert_eq!(volume_table(&[]).row_count(), 0);
    }

    #[tokio::test]
    async fn test_list_failure_propagates() {
        let directory = FakeDirectory {
            list_failure: Some("Cannot connect to the Docker daemon".into()),
            ..Default::default()
        };
        let (sink, captured) = OutputSink::in_memory();

        let err = list_volumes(&directory, &sink).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot connect to the Docker daemon");
        assert!(captured.contents().is_empty());
    }
}
