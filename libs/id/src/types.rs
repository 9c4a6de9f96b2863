//! Typed resource IDs for the supported resource types.
//!
//! Each type is a segment template plus a field mapping; all parsing and
//! formatting logic lives in the shared engine.

use crate::define_resource_id;
use crate::segment::Segment;
use crate::template::SegmentTemplate;

// =============================================================================
// Shared segments
// =============================================================================

const SUBSCRIPTIONS: Segment = Segment::static_segment("staticSubscriptions", "subscriptions");
const SUBSCRIPTION_ID: Segment = Segment::subscription_id("subscriptionId");
const RESOURCE_GROUPS: Segment = Segment::static_segment("staticResourceGroups", "resourceGroups");
const RESOURCE_GROUP_NAME: Segment = Segment::resource_group_name("resourceGroupName");
const PROVIDERS: Segment = Segment::static_segment("staticProviders", "providers");

const MICROSOFT_COMPUTE: Segment =
    Segment::resource_provider("staticMicrosoftCompute", "Microsoft.Compute");
const MICROSOFT_SQL: Segment = Segment::resource_provider("staticMicrosoftSql", "Microsoft.Sql");
const SQL_SERVERS: Segment = Segment::static_segment("staticServers", "servers");
const SQL_SERVER_NAME: Segment = Segment::user_specified("serverName");

/// DNS record types addressable as record sets.
pub const DNS_RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "CAA", "CNAME", "MX", "NS", "PTR", "SOA", "SRV", "TXT",
];

// =============================================================================
// Subscriptions and Resource Groups
// =============================================================================

pub static SUBSCRIPTION: SegmentTemplate =
    SegmentTemplate::new("Subscription", &[SUBSCRIPTIONS, SUBSCRIPTION_ID]);

define_resource_id!(
    /// A subscription.
    SubscriptionId, SUBSCRIPTION, {
        subscription_id => "subscriptionId",
    }
);

pub static RESOURCE_GROUP: SegmentTemplate = SegmentTemplate::new(
    "Resource Group",
    &[SUBSCRIPTIONS, SUBSCRIPTION_ID, RESOURCE_GROUPS, RESOURCE_GROUP_NAME],
);

define_resource_id!(
    /// A resource group within a subscription.
    ResourceGroupId, RESOURCE_GROUP, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
    }
);

// =============================================================================
// Analytics
// =============================================================================

pub static DATABRICKS_WORKSPACE: SegmentTemplate = SegmentTemplate::new(
    "Databricks Workspace",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftDatabricks", "Microsoft.Databricks"),
        Segment::static_segment("staticWorkspaces", "workspaces"),
        Segment::user_specified("workspaceName"),
    ],
);

define_resource_id!(
    /// A Databricks workspace.
    DatabricksWorkspaceId, DATABRICKS_WORKSPACE, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        workspace_name => "workspaceName",
    }
);

// =============================================================================
// Compute
// =============================================================================

pub static VIRTUAL_MACHINE: SegmentTemplate = SegmentTemplate::new(
    "Virtual Machine",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_COMPUTE,
        Segment::static_segment("staticVirtualMachines", "virtualMachines"),
        Segment::user_specified("virtualMachineName"),
    ],
);

define_resource_id!(
    /// A virtual machine.
    VirtualMachineId, VIRTUAL_MACHINE, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        virtual_machine_name => "virtualMachineName",
    }
);

pub static VIRTUAL_MACHINE_SCALE_SET: SegmentTemplate = SegmentTemplate::new(
    "Virtual Machine Scale Set",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_COMPUTE,
        Segment::static_segment("staticVirtualMachineScaleSets", "virtualMachineScaleSets"),
        Segment::user_specified("virtualMachineScaleSetName"),
    ],
);

define_resource_id!(
    /// A virtual machine scale set.
    VirtualMachineScaleSetId, VIRTUAL_MACHINE_SCALE_SET, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        virtual_machine_scale_set_name => "virtualMachineScaleSetName",
    }
);

pub static MANAGED_DISK: SegmentTemplate = SegmentTemplate::new(
    "Managed Disk",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_COMPUTE,
        Segment::static_segment("staticDisks", "disks"),
        Segment::user_specified("diskName"),
    ],
);

define_resource_id!(
    /// A managed disk.
    ManagedDiskId, MANAGED_DISK, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        disk_name => "diskName",
    }
);

pub static PROXIMITY_PLACEMENT_GROUP: SegmentTemplate = SegmentTemplate::new(
    "Proximity Placement Group",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_COMPUTE,
        Segment::static_segment("staticProximityPlacementGroups", "proximityPlacementGroups"),
        Segment::user_specified("proximityPlacementGroupName"),
    ],
);

define_resource_id!(
    /// A proximity placement group.
    ProximityPlacementGroupId, PROXIMITY_PLACEMENT_GROUP, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        proximity_placement_group_name => "proximityPlacementGroupName",
    }
);

pub static BATCH_POOL: SegmentTemplate = SegmentTemplate::new(
    "Batch Pool",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftBatch", "Microsoft.Batch"),
        Segment::static_segment("staticBatchAccounts", "batchAccounts"),
        Segment::user_specified("batchAccountName"),
        Segment::static_segment("staticPools", "pools"),
        Segment::user_specified("poolName"),
    ],
);

define_resource_id!(
    /// A pool within a Batch account.
    BatchPoolId, BATCH_POOL, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        batch_account_name => "batchAccountName",
        pool_name => "poolName",
    }
);

pub static KUBERNETES_CLUSTER: SegmentTemplate = SegmentTemplate::new(
    "Kubernetes Cluster",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftContainerService", "Microsoft.ContainerService"),
        Segment::static_segment("staticManagedClusters", "managedClusters"),
        Segment::user_specified("managedClusterName"),
    ],
);

define_resource_id!(
    /// A managed Kubernetes cluster.
    KubernetesClusterId, KUBERNETES_CLUSTER, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        managed_cluster_name => "managedClusterName",
    }
);

// =============================================================================
// Storage and Secrets
// =============================================================================

pub static STORAGE_ACCOUNT: SegmentTemplate = SegmentTemplate::new(
    "Storage Account",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftStorage", "Microsoft.Storage"),
        Segment::static_segment("staticStorageAccounts", "storageAccounts"),
        Segment::user_specified("storageAccountName"),
    ],
);

define_resource_id!(
    /// A storage account.
    StorageAccountId, STORAGE_ACCOUNT, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        storage_account_name => "storageAccountName",
    }
);

pub static KEY_VAULT: SegmentTemplate = SegmentTemplate::new(
    "Key Vault",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
        Segment::static_segment("staticVaults", "vaults"),
        Segment::user_specified("vaultName"),
    ],
);

define_resource_id!(
    /// A Key Vault.
    KeyVaultId, KEY_VAULT, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        vault_name => "vaultName",
    }
);

// =============================================================================
// Databases
// =============================================================================

pub static SQL_SERVER: SegmentTemplate = SegmentTemplate::new(
    "SQL Server",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_SQL,
        SQL_SERVERS,
        SQL_SERVER_NAME,
    ],
);

define_resource_id!(
    /// A SQL logical server.
    SqlServerId, SQL_SERVER, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        server_name => "serverName",
    }
);

pub static SQL_DATABASE: SegmentTemplate = SegmentTemplate::new(
    "SQL Database",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_SQL,
        SQL_SERVERS,
        SQL_SERVER_NAME,
        Segment::static_segment("staticDatabases", "databases"),
        Segment::user_specified("databaseName"),
    ],
);

define_resource_id!(
    /// A database on a SQL logical server.
    SqlDatabaseId, SQL_DATABASE, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        server_name => "serverName",
        database_name => "databaseName",
    }
);

pub static SQL_SECURITY_ALERT_POLICY: SegmentTemplate = SegmentTemplate::new(
    "SQL Server Security Alert Policy",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        MICROSOFT_SQL,
        SQL_SERVERS,
        SQL_SERVER_NAME,
        Segment::static_segment("staticSecurityAlertPolicies", "securityAlertPolicies"),
        Segment::constant("securityAlertPolicyName", &["Default"]),
    ],
);

define_resource_id!(
    /// The singleton security alert policy of a SQL logical server.
    SqlSecurityAlertPolicyId, SQL_SECURITY_ALERT_POLICY, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        server_name => "serverName",
        security_alert_policy_name => "securityAlertPolicyName",
    }
);

pub static COSMOS_DB_ACCOUNT: SegmentTemplate = SegmentTemplate::new(
    "Cosmos DB Account",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftDocumentDB", "Microsoft.DocumentDB"),
        Segment::static_segment("staticDatabaseAccounts", "databaseAccounts"),
        Segment::user_specified("databaseAccountName"),
    ],
);

define_resource_id!(
    /// A Cosmos DB database account.
    CosmosDbAccountId, COSMOS_DB_ACCOUNT, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        database_account_name => "databaseAccountName",
    }
);

// =============================================================================
// Networking
// =============================================================================

pub static APPLICATION_GATEWAY: SegmentTemplate = SegmentTemplate::new(
    "Application Gateway",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_segment("staticApplicationGateways", "applicationGateways"),
        Segment::user_specified("applicationGatewayName"),
    ],
);

define_resource_id!(
    /// An application gateway.
    ApplicationGatewayId, APPLICATION_GATEWAY, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        application_gateway_name => "applicationGatewayName",
    }
);

pub static DNS_RECORD_SET: SegmentTemplate = SegmentTemplate::new(
    "DNS Record Set",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_segment("staticDnsZones", "dnsZones"),
        Segment::user_specified("dnsZoneName"),
        Segment::constant("recordType", DNS_RECORD_TYPES),
        Segment::user_specified("relativeRecordSetName"),
    ],
);

define_resource_id!(
    /// A record set within a DNS zone, addressed by record type.
    DnsRecordSetId, DNS_RECORD_SET, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        dns_zone_name => "dnsZoneName",
        record_type => "recordType",
        relative_record_set_name => "relativeRecordSetName",
    }
);

pub static CDN_ENDPOINT: SegmentTemplate = SegmentTemplate::new(
    "CDN Endpoint",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftCdn", "Microsoft.Cdn"),
        Segment::static_segment("staticProfiles", "profiles"),
        Segment::user_specified("profileName"),
        Segment::static_segment("staticEndpoints", "endpoints"),
        Segment::user_specified("endpointName"),
    ],
);

define_resource_id!(
    /// An endpoint of a CDN profile.
    CdnEndpointId, CDN_ENDPOINT, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        profile_name => "profileName",
        endpoint_name => "endpointName",
    }
);

// =============================================================================
// Identity and Web
// =============================================================================

pub static USER_ASSIGNED_IDENTITY: SegmentTemplate = SegmentTemplate::new(
    "User Assigned Identity",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftManagedIdentity", "Microsoft.ManagedIdentity"),
        Segment::static_segment("staticUserAssignedIdentities", "userAssignedIdentities"),
        Segment::user_specified("userAssignedIdentityName"),
    ],
);

define_resource_id!(
    /// A user-assigned managed identity.
    UserAssignedIdentityId, USER_ASSIGNED_IDENTITY, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        user_assigned_identity_name => "userAssignedIdentityName",
    }
);

pub static APP_SERVICE_ENVIRONMENT: SegmentTemplate = SegmentTemplate::new(
    "App Service Environment",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::static_segment("staticHostingEnvironments", "hostingEnvironments"),
        Segment::user_specified("hostingEnvironmentName"),
    ],
);

define_resource_id!(
    /// An App Service Environment.
    AppServiceEnvironmentId, APP_SERVICE_ENVIRONMENT, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        hosting_environment_name => "hostingEnvironmentName",
    }
);

pub static IOT_HUB: SegmentTemplate = SegmentTemplate::new(
    "IoT Hub",
    &[
        SUBSCRIPTIONS,
        SUBSCRIPTION_ID,
        RESOURCE_GROUPS,
        RESOURCE_GROUP_NAME,
        PROVIDERS,
        Segment::resource_provider("staticMicrosoftDevices", "Microsoft.Devices"),
        Segment::static_segment("staticIotHubs", "iotHubs"),
        Segment::user_specified("iotHubName"),
    ],
);

define_resource_id!(
    /// An IoT hub.
    IotHubId, IOT_HUB, {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        iot_hub_name => "iotHubName",
    }
);

/// Every template in this module, in registration order.
pub static ALL_TEMPLATES: &[&SegmentTemplate] = &[
    &DATABRICKS_WORKSPACE,
    &VIRTUAL_MACHINE,
    &VIRTUAL_MACHINE_SCALE_SET,
    &MANAGED_DISK,
    &PROXIMITY_PLACEMENT_GROUP,
    &BATCH_POOL,
    &KUBERNETES_CLUSTER,
    &STORAGE_ACCOUNT,
    &KEY_VAULT,
    &SQL_DATABASE,
    &SQL_SECURITY_ALERT_POLICY,
    &SQL_SERVER,
    &COSMOS_DB_ACCOUNT,
    &APPLICATION_GATEWAY,
    &DNS_RECORD_SET,
    &CDN_ENDPOINT,
    &USER_ASSIGNED_IDENTITY,
    &APP_SERVICE_ENVIRONMENT,
    &IOT_HUB,
    &RESOURCE_GROUP,
    &SUBSCRIPTION,
];

// =============================================================================
// Tests
// =============================================================================
