// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipeboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipeboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::job::Job;

/// A run of consecutive jobs that share a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageGroup<'a> {
    stage_index: usize,
    jobs: Vec<&'a Job>,
}

impl<'a> StageGroup<'a> {
    /// 1-based position of the group among all groups.
    pub fn stage_index(&self) -> usize {
        self.stage_index
    }

    pub fn stage_name(&self) -> &'a str {
        // Groups are never empty by construction.
        self.jobs.first().map(|job| job.stage()).unwrap_or_default()
    }

    pub fn jobs(&self) -> &[&'a Job] {
        &self.jobs
    }

    /// Jobs paired with their 0-based row within the group.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a Job)> + '_ {
        self.jobs.iter().copied().enumerate()
    }
}

/// Splits `jobs` into stage groups by adjacency.
///
/// A new group starts whenever a job's stage differs from the previous job's stage, so the same
/// stage name appearing in two separate runs yields two groups.
pub fn group_stages(jobs: &[Job]) -> Vec<StageGroup<'_>> {
    let mut groups = Vec::<StageGroup<'_>>::new();

    for job in jobs {
        match groups.last_mut() {
            Some(group) if group.stage_name() == job.stage() => group.jobs.push(job),
            _ => {
                let stage_index = groups.len() + 1;
                groups.push(StageGroup { stage_index, jobs: vec![job] });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::group_stages;
    use crate::model::fixtures::{build_test_deploy, repeated_stage_name};
    use crate::model::{Job, JobStatus};

    fn summary(jobs: &[Job]) -> Vec<(usize, String, usize)> {
        group_stages(jobs)
            .iter()
            .map(|group| (group.stage_index(), group.stage_name().to_owned(), group.jobs().len()))
            .collect()
    }

    #[test]
    fn groups_consecutive_jobs_by_stage() {
        assert_eq!(
            summary(&build_test_deploy()),
            vec![
                (1, "build".to_owned(), 2),
                (2, "test".to_owned(), 1),
                (3, "deploy".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn assigns_rows_in_input_order() {
        let jobs = build_test_deploy();
        let groups = group_stages(&jobs);
        let rows = groups[0].rows().map(|(row, job)| (row, job.name())).collect::<Vec<_>>();
        assert_eq!(rows, vec![(0, "compile"), (1, "assets")]);
    }

    #[test]
    fn does_not_merge_non_adjacent_runs_of_a_stage() {
        assert_eq!(
            summary(&repeated_stage_name()),
            vec![
                (1, "build".to_owned(), 1),
                (2, "test".to_owned(), 1),
                (3, "build".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_stages(&[]).is_empty());
    }

    #[test]
    fn single_job_yields_one_group_with_one_row() {
        let jobs = vec![Job::new("only", "solo", JobStatus::Pending)];
        let groups = group_stages(&jobs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].rows().map(|(row, _)| row).collect::<Vec<_>>(), vec![0]);
    }
}
