/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Partition-aware endpoint resolution
//!
//! A partition is a group of regions that share a DNS suffix. Regional services resolve to
//! `https://{service}.{region}.{dnsSuffix}`. Global services (eg. Route53) resolve to a single
//! hostname per partition and are always signed with that partition's signing region.

use crate::Params;
use sdk_http::endpoint::{self, Endpoint, ResolveEndpoint, ResolveEndpointError};
use sdk_types::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partition {
    id: &'static str,
    region_prefix: &'static str,
    dns_suffix: &'static str,
    dual_stack_dns_suffix: Option<&'static str>,
}

/// Known partitions. The first entry whose prefix matches the region wins, the last entry
/// (`aws`) matches every region.
const PARTITIONS: &[Partition] = &[
    Partition {
        id: "aws-cn",
        region_prefix: "cn-",
        dns_suffix: "amazonaws.com.cn",
        dual_stack_dns_suffix: Some("api.amazonwebservices.com.cn"),
    },
    Partition {
        id: "aws-us-gov",
        region_prefix: "us-gov-",
        dns_suffix: "amazonaws.com",
        dual_stack_dns_suffix: Some("api.aws"),
    },
    Partition {
        id: "aws-iso-b",
        region_prefix: "us-isob-",
        dns_suffix: "sc2s.sgov.gov",
        dual_stack_dns_suffix: None,
    },
    Partition {
        id: "aws-iso",
        region_prefix: "us-iso-",
        dns_suffix: "c2s.ic.gov",
        dual_stack_dns_suffix: None,
    },
    Partition {
        id: "aws",
        region_prefix: "",
        dns_suffix: "amazonaws.com",
        dual_stack_dns_suffix: Some("api.aws"),
    },
];

fn partition_for(region: &str) -> &'static Partition {
    PARTITIONS
        .iter()
        .find(|p| region.starts_with(p.region_prefix))
        .unwrap_or(&PARTITIONS[PARTITIONS.len() - 1])
}

/// A region is used as a DNS label so it must be a valid host label
fn is_valid_host_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// The hostname a global service uses within a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalEndpoint {
    pub partition: &'static str,
    pub hostname: &'static str,
    pub signing_region: &'static str,
}

/// Endpoint resolver for a single service
#[derive(Debug, Clone)]
pub struct PartitionResolver {
    service: &'static str,
    global: Vec<GlobalEndpoint>,
}

impl PartitionResolver {
    /// Resolver for a service with a regional endpoint in every region
    pub fn regional(service: &'static str) -> Self {
        PartitionResolver {
            service,
            global: vec![],
        }
    }

    /// Resolver for a service with one endpoint per partition
    ///
    /// Partitions that are not listed fall back to regional endpoints.
    pub fn global(service: &'static str, endpoints: &[GlobalEndpoint]) -> Self {
        PartitionResolver {
            service,
            global: endpoints.to_vec(),
        }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    fn global_endpoint(&self, partition: &Partition) -> Option<&GlobalEndpoint> {
        self.global.iter().find(|g| g.partition == partition.id)
    }

    fn resolve_override(&self, uri: &str, params: &Params) -> endpoint::Result {
        if params.use_fips() {
            return Err(ResolveEndpointError::message(
                "Invalid Configuration: FIPS and custom endpoint are not supported",
            ));
        }
        if params.use_dual_stack() {
            return Err(ResolveEndpointError::message(
                "Invalid Configuration: Dualstack and custom endpoint are not supported",
            ));
        }
        let endpoint = Endpoint::parse(uri)?;
        Ok(match params.region() {
            Some(region) => endpoint.with_signing_region(region.clone()),
            None => endpoint,
        })
    }
}

impl ResolveEndpoint<Params> for PartitionResolver {
    fn resolve_endpoint(&self, params: &Params) -> endpoint::Result {
        if let Some(uri) = params.endpoint() {
            return self.resolve_override(uri, params);
        }
        let region = params
            .region()
            .ok_or_else(|| ResolveEndpointError::message("Invalid Configuration: Missing Region"))?;
        if !is_valid_host_label(region.as_ref()) {
            return Err(ResolveEndpointError::message(format!(
                "Invalid Configuration: `{}` is not a valid region",
                region
            )));
        }
        let partition = partition_for(region.as_ref());

        if let Some(global) = self.global_endpoint(partition) {
            if params.use_dual_stack() {
                return Err(ResolveEndpointError::message(format!(
                    "DualStack is enabled but {} does not support DualStack",
                    self.service
                )));
            }
            let hostname = if params.use_fips() {
                format!("{}-fips.{}", self.service, partition.dns_suffix)
            } else {
                global.hostname.to_string()
            };
            return Ok(Endpoint::parse(&format!("https://{}", hostname))?
                .with_signing_region(Region::from_static(global.signing_region)));
        }

        let dns_suffix = if params.use_dual_stack() {
            partition.dual_stack_dns_suffix.ok_or_else(|| {
                ResolveEndpointError::message(format!(
                    "DualStack is enabled but partition {} does not support DualStack",
                    partition.id
                ))
            })?
        } else {
            partition.dns_suffix
        };
        let service = if params.use_fips() {
            format!("{}-fips", self.service)
        } else {
            self.service.to_string()
        };
        let uri = "https://{service}.{region}.{dnsSuffix}"
            .replace("{service}", &service)
            .replace("{region}", region.as_ref())
            .replace("{dnsSuffix}", dns_suffix);
        Ok(Endpoint::parse(&uri)?.with_signing_region(region.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::{GlobalEndpoint, PartitionResolver};
    use crate::Params;
    use sdk_http::endpoint::ResolveEndpoint;
    use sdk_types::region::Region;

    fn params(region: &'static str) -> Params {
        Params::builder().region(Region::from_static(region)).build()
    }

    fn route53() -> PartitionResolver {
        PartitionResolver::global(
            "route53",
            &[
                GlobalEndpoint {
                    partition: "aws",
                    hostname: "route53.amazonaws.com",
                    signing_region: "us-east-1",
                },
                GlobalEndpoint {
                    partition: "aws-cn",
                    hostname: "route53.amazonaws.com.cn",
                    signing_region: "cn-northwest-1",
                },
            ],
        )
    }

    #[test]
    fn regional_endpoints() {
        let resolver = PartitionResolver::regional("gamelift");
        let cases = [
            ("us-east-1", "https://gamelift.us-east-1.amazonaws.com/"),
            ("cn-north-1", "https://gamelift.cn-north-1.amazonaws.com.cn/"),
            ("us-gov-west-1", "https://gamelift.us-gov-west-1.amazonaws.com/"),
            ("us-iso-east-1", "https://gamelift.us-iso-east-1.c2s.ic.gov/"),
            ("us-isob-east-1", "https://gamelift.us-isob-east-1.sc2s.sgov.gov/"),
        ];
        for (region, expected) in cases.iter() {
            let endpoint = resolver.resolve_endpoint(&params(region)).unwrap();
            assert_eq!(endpoint.uri().to_string(), *expected, "region: {}", region);
            assert_eq!(endpoint.signing_region(), Some(&Region::from_static(region)));
        }
    }

    #[test]
    fn fips_and_dual_stack() {
        let resolver = PartitionResolver::regional("m2");
        let fips = Params::builder()
            .region(Region::from_static("us-west-2"))
            .use_fips(true)
            .build();
        assert_eq!(
            resolver.resolve_endpoint(&fips).unwrap().uri().to_string(),
            "https://m2-fips.us-west-2.amazonaws.com/"
        );
        let dual_stack = Params::builder()
            .region(Region::from_static("us-west-2"))
            .use_dual_stack(true)
            .build();
        assert_eq!(
            resolver.resolve_endpoint(&dual_stack).unwrap().uri().to_string(),
            "https://m2.us-west-2.api.aws/"
        );
        let iso = Params::builder()
            .region(Region::from_static("us-iso-east-1"))
            .use_dual_stack(true)
            .build();
        assert!(resolver.resolve_endpoint(&iso).is_err());
    }

    #[test]
    fn global_endpoints() {
        let resolver = route53();
        let endpoint = resolver.resolve_endpoint(&params("eu-west-1")).unwrap();
        assert_eq!(endpoint.uri().to_string(), "https://route53.amazonaws.com/");
        assert_eq!(endpoint.signing_region(), Some(&Region::from_static("us-east-1")));

        let endpoint = resolver.resolve_endpoint(&params("cn-north-1")).unwrap();
        assert_eq!(endpoint.uri().to_string(), "https://route53.amazonaws.com.cn/");
        assert_eq!(
            endpoint.signing_region(),
            Some(&Region::from_static("cn-northwest-1"))
        );

        // partitions without a global endpoint fall back to the regional form
        let endpoint = resolver.resolve_endpoint(&params("us-gov-west-1")).unwrap();
        assert_eq!(
            endpoint.uri().to_string(),
            "https://route53.us-gov-west-1.amazonaws.com/"
        );
    }

    #[test]
    fn endpoint_override() {
        let resolver = PartitionResolver::regional("clouddirectory");
        let params = Params::builder()
            .region(Region::from_static("us-east-1"))
            .endpoint("http://localhost:8000".to_string())
            .build();
        let endpoint = resolver.resolve_endpoint(&params).unwrap();
        assert_eq!(endpoint.uri().to_string(), "http://localhost:8000/");
        assert_eq!(endpoint.signing_region(), Some(&Region::from_static("us-east-1")));

        let fips = Params::builder()
            .endpoint("http://localhost:8000".to_string())
            .use_fips(true)
            .build();
        assert!(resolver.resolve_endpoint(&fips).is_err());
    }

    #[test]
    fn invalid_regions() {
        let resolver = PartitionResolver::regional("waf");
        assert!(resolver.resolve_endpoint(&Params::default()).is_err());
        assert!(resolver
            .resolve_endpoint(&params("us-east-1.evil.com"))
            .is_err());
        assert!(resolver.resolve_endpoint(&params("-us-east-1")).is_err());
    }
}
